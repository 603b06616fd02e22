//! # Student Records
//!
//! The authoritative in-memory record store and the rules applied to
//! incoming record fields.
//!
//! A store is an ordered sequence of [`Student`] values plus a process-wide
//! id counter. Ids are assigned on create, never change, and are never handed
//! out again after a delete.

pub mod errors;
pub mod store;
pub mod student;

pub use errors::{RecordError, RecordResult};
pub use store::{seed_students, StudentStore};
pub use student::{
    ConstraintViolation, Student, StudentFields, StudentInput, Validation, AGE_MAX, AGE_MIN,
};
