//! # HTTP Server Module
//!
//! Axum server exposing the student record store as a JSON API.
//!
//! # Endpoints
//!
//! All routes live under `/api`:
//!
//! - `GET /health` - Health check
//! - `GET /students` - List all students in store order
//! - `GET /students/:id` - Fetch one student
//! - `POST /students` - Create a student
//! - `PUT /students/:id` - Replace a student's fields
//! - `DELETE /students/:id` - Remove a student

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::{DeleteResponse, HealthResponse};
pub use server::HttpServer;
