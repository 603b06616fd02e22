//! # API Transport
//!
//! Thin `reqwest` wrapper over the `/api` endpoints.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::http_server::{DeleteResponse, ErrorResponse, HealthResponse};
use crate::records::{Student, StudentFields};

use super::errors::{ClientError, ClientResult};

/// Base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let resp = self.http.get(self.url("/health")).send().await?;
        decode(resp).await
    }

    /// Fetch the full record list
    pub async fn list(&self) -> ClientResult<Vec<Student>> {
        let url = self.url("/students");
        tracing::debug!(%url, "loading students");
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                ),
            });
        }
        Ok(resp.json().await?)
    }

    pub async fn get(&self, id: u64) -> ClientResult<Student> {
        let resp = self
            .http
            .get(self.url(&format!("/students/{}", id)))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create(&self, fields: &StudentFields) -> ClientResult<Student> {
        tracing::debug!(?fields, "creating student");
        let resp = self
            .http
            .post(self.url("/students"))
            .json(fields)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn update(&self, id: u64, fields: &StudentFields) -> ClientResult<Student> {
        tracing::debug!(id, ?fields, "updating student");
        let resp = self
            .http
            .put(self.url(&format!("/students/{}", id)))
            .json(fields)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete(&self, id: u64) -> ClientResult<DeleteResponse> {
        tracing::debug!(id, "deleting student");
        let resp = self
            .http
            .delete(self.url(&format!("/students/{}", id)))
            .send()
            .await?;
        decode(resp).await
    }
}

/// Decode a success body, or turn an error status into a `ClientError`
/// carrying the server's message when it sent one.
async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    let message = resp
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status_fallback(status));

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

fn status_fallback(status: StatusCode) -> String {
    format!("HTTP {}", status.as_u16())
}
