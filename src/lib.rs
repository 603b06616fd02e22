//! studentdesk - student records API server and terminal client
//!
//! - **`records`**: the in-memory record store, field validation and seed data.
//! - **`http_server`**: the axum JSON API under `/api`.
//! - **`client`**: a reqwest-backed client that caches the list, renders it
//!   and reloads after every change.
//! - **`cli`**: the `serve` and `client` commands.
//! - **`observability`**: tracing subscriber setup.

pub mod cli;
pub mod client;
pub mod http_server;
pub mod observability;
pub mod records;
