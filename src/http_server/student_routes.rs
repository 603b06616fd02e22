//! Student HTTP Routes
//!
//! CRUD endpoints over the shared [`StudentStore`].

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::records::student::parse_int_prefix;
use crate::records::{RecordError, Student, StudentInput, StudentStore};

use super::errors::{ApiError, ApiResult};
use super::response::DeleteResponse;

/// Create student routes
pub fn student_routes(store: Arc<StudentStore>) -> Router {
    Router::new()
        .route("/students", get(list_students_handler).post(create_student_handler))
        .route(
            "/students/:id",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .with_state(store)
}

// ==================
// Helper Functions
// ==================

/// Read the leading integer of a path id. Anything that cannot name a
/// stored record is reported as not found.
fn parse_id(raw: &str) -> ApiResult<u64> {
    parse_int_prefix(raw)
        .and_then(|id| u64::try_from(id).ok())
        .ok_or(ApiError::Record(RecordError::NotFound))
}

fn body(payload: Result<Json<StudentInput>, JsonRejection>) -> ApiResult<StudentInput> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))
}

// ==================
// Handlers
// ==================

async fn list_students_handler(
    State(store): State<Arc<StudentStore>>,
) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(store.list()?))
}

async fn get_student_handler(
    State(store): State<Arc<StudentStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Student>> {
    let id = parse_id(&id)?;
    Ok(Json(store.get(id)?))
}

async fn create_student_handler(
    State(store): State<Arc<StudentStore>>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let input = body(payload)?;
    let student = store.create(&input)?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn update_student_handler(
    State(store): State<Arc<StudentStore>>,
    Path(id): Path<String>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> ApiResult<Json<Student>> {
    let input = body(payload)?;
    match parse_id(&id) {
        Ok(id) => Ok(Json(store.update(id, &input)?)),
        Err(not_found) => {
            // a bad body is reported before an unknown id
            input.validate(store.validation())?;
            Err(not_found)
        }
    }
}

async fn delete_student_handler(
    State(store): State<Arc<StudentStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    let removed = store.delete(id)?;
    Ok(Json(DeleteResponse::new(removed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("6").unwrap(), 6);
        assert_eq!(parse_id("6abc").unwrap(), 6);
        assert!(matches!(
            parse_id("abc"),
            Err(ApiError::Record(RecordError::NotFound))
        ));
        assert!(matches!(
            parse_id("-1"),
            Err(ApiError::Record(RecordError::NotFound))
        ));
    }

    #[test]
    fn test_routes_build() {
        let _router = student_routes(Arc::new(StudentStore::seeded()));
    }
}
