//! # Student Client
//!
//! Terminal client for the student records API.
//!
//! [`Dashboard`] holds the client-side state: a cached copy of the record
//! list, the add/edit form mode, the record pending deletion and the current
//! notification. Every successful mutation is followed by a full reload of
//! the list, so the cache is always a copy of what the server last returned.

pub mod api;
pub mod dashboard;
pub mod errors;
pub mod form;
pub mod notification;
pub mod render;
pub mod summary;

pub use api::{ApiClient, DEFAULT_API_URL};
pub use dashboard::{Dashboard, ProgressHook};
pub use errors::{ClientError, ClientResult};
pub use form::{FormMode, StudentForm};
pub use render::LOADING_MESSAGE;
pub use notification::{Notification, NotificationKind, NOTIFICATION_TTL};
pub use summary::{filter_students, Summary};
