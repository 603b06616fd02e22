//! # Response Bodies
//!
//! Success payloads that are not a bare record or record list.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::records::Student;

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

impl HealthResponse {
    /// Healthy response stamped with the current UTC time
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Backend is working!".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Delete confirmation carrying the removed record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub student: Student,
}

impl DeleteResponse {
    pub fn new(student: Student) -> Self {
        Self {
            message: "Student deleted successfully".to_string(),
            student,
        }
    }
}
