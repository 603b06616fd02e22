//! HTTP API Contract Tests
//!
//! Drives the full router (CORS and tracing layers included) with
//! `tower::ServiceExt::oneshot` and checks status codes, bodies and the
//! store invariants behind them:
//! - ids are assigned from a counter and never reused
//! - rejected writes leave the store untouched
//! - updates keep list position, deletes remove exactly one record

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use studentdesk::http_server::{HttpServer, HttpServerConfig};
use studentdesk::records::Validation;

// =============================================================================
// Test Utilities
// =============================================================================

fn app() -> Router {
    HttpServer::new().router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn list_ids(app: &Router) -> Vec<u64> {
    let (_, body) = send(app, Method::GET, "/api/students", None).await;
    body.as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect()
}

fn amy() -> Value {
    json!({"name": "Amy", "age": 20, "grade": "A", "email": "amy@x.com"})
}

// =============================================================================
// Health and Reads
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Backend is working!");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_list_seeded_in_order() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/students", None).await;

    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 5);
    assert_eq!(students[0]["name"], "John Doe");
    assert_eq!(students[4]["name"], "Tom Brown");
    assert_eq!(list_ids(&app).await, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_get_by_id() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/students/3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 3, "name": "Mike Johnson", "age": 19, "grade": "A", "email": "mike@school.com"})
    );
}

#[tokio::test]
async fn test_get_unknown_ids_are_not_found() {
    let app = app();
    for uri in ["/api/students/99", "/api/students/abc", "/api/students/0"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["error"], "Student not found");
        assert_eq!(body["code"], 404);
    }
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_assigns_next_id() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/students", Some(amy())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 6, "name": "Amy", "age": 20, "grade": "A", "email": "amy@x.com"})
    );
    assert_eq!(list_ids(&app).await, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_create_coerces_age() {
    let app = app();
    let mut body = amy();
    body["age"] = json!("22");

    let (status, created) = send(&app, Method::POST, "/api/students", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["age"], 22);
}

#[tokio::test]
async fn test_create_missing_or_falsy_fields() {
    let app = app();
    let bodies = [
        json!({}),
        json!({"name": "Amy", "age": 20, "grade": "A"}),
        json!({"name": "", "age": 20, "grade": "A", "email": "amy@x.com"}),
        json!({"name": "Amy", "age": 0, "grade": "A", "email": "amy@x.com"}),
        json!({"name": "Amy", "age": 20, "grade": null, "email": "amy@x.com"}),
    ];

    for body in bodies {
        let (status, error) = send(&app, Method::POST, "/api/students", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(error["error"], "All fields are required");
    }

    assert_eq!(list_ids(&app).await, vec![1, 2, 3, 4, 5]);
    // the counter did not move either
    let (_, created) = send(&app, Method::POST, "/api/students", Some(amy())).await;
    assert_eq!(created["id"], 6);
}

#[tokio::test]
async fn test_create_non_numeric_age_rejected() {
    let app = app();
    let mut body = amy();
    body["age"] = json!("twenty");

    let (status, error) = send(&app, Method::POST, "/api/students", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Age must be an integer");
    assert_eq!(list_ids(&app).await.len(), 5);
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/students")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 400);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_presence_mode_accepts_out_of_range_values() {
    let app = app();
    let body = json!({"name": "Old", "age": 99, "grade": "Z", "email": "nobody"});

    let (status, created) = send(&app, Method::POST, "/api/students", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["age"], 99);
}

#[tokio::test]
async fn test_strict_mode_rejects_out_of_range_age() {
    let config = HttpServerConfig {
        validation: Validation::Strict,
        ..Default::default()
    };
    let app = HttpServer::with_config(config).router();
    let body = json!({"name": "Old", "age": 99, "grade": "A", "email": "old@x.com"});

    let (status, error) = send(&app, Method::POST, "/api/students", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Age must be between 16 and 30");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_keeps_position_and_id() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/api/students", None).await;

    let body = json!({"id": 77, "name": "Jane S", "age": "23", "grade": "A", "email": "js@school.com"});
    let (status, updated) = send(&app, Method::PUT, "/api/students/2", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": 2, "name": "Jane S", "age": 23, "grade": "A", "email": "js@school.com"})
    );

    let (_, after) = send(&app, Method::GET, "/api/students", None).await;
    let before = before.as_array().unwrap();
    let after = after.as_array().unwrap();
    assert_eq!(before.len(), after.len());
    for i in 0..before.len() {
        if i == 1 {
            assert_eq!(after[i], updated);
        } else {
            assert_eq!(after[i], before[i]);
        }
    }
}

#[tokio::test]
async fn test_update_errors() {
    let app = app();

    let (status, _) = send(&app, Method::PUT, "/api/students/42", Some(amy())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, "/api/students/1", Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // body problems are reported before an unknown id
    let (status, _) = send(&app, Method::PUT, "/api/students/42", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, Method::PUT, "/api/students/abc", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, first) = send(&app, Method::GET, "/api/students/1", None).await;
    assert_eq!(first["name"], "John Doe");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/api/students/3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student deleted successfully");
    assert_eq!(body["student"]["name"], "Mike Johnson");
    assert_eq!(list_ids(&app).await, vec![1, 2, 4, 5]);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app = app();
    let (first, _) = send(&app, Method::DELETE, "/api/students/5", None).await;
    let (second, body) = send(&app, Method::DELETE, "/api/students/5", None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
    assert_eq!(list_ids(&app).await, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_deleted_ids_are_never_reassigned() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/students", Some(amy())).await;
    assert_eq!(created["id"], 6);

    send(&app, Method::DELETE, "/api/students/6", None).await;
    let (_, again) = send(&app, Method::POST, "/api/students", Some(amy())).await;

    assert_eq!(again["id"], 7);
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

#[tokio::test]
async fn test_create_update_delete_scenario() {
    let app = app();

    let (status, created) = send(&app, Method::POST, "/api/students", Some(amy())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 6);

    let (_, all) = send(&app, Method::GET, "/api/students", None).await;
    assert_eq!(all.as_array().unwrap().len(), 6);

    let body = json!({"name": "Amy K", "age": 21, "grade": "B", "email": "amy@x.com"});
    let (status, updated) = send(&app, Method::PUT, "/api/students/6", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Amy K");
    assert_eq!(list_ids(&app).await, vec![1, 2, 3, 4, 5, 6]);

    let (status, deleted) = send(&app, Method::DELETE, "/api/students/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["student"], updated);

    let (status, _) = send(&app, Method::GET, "/api/students/6", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// CORS
// =============================================================================

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/students")
        .header("origin", "http://localhost:8080")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
