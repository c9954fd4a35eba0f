//! Task API Client
//!
//! HTTP bindings to the backend, organized by domain. Requests are described
//! as plain [`ApiRequest`] values and executed by a [`Transport`], so the
//! mapping between operations and HTTP can be exercised without a browser.

mod auth;
mod tasks;
mod transport;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{ErrorBody, Task, TokenResponse};
use crate::session::Session;

pub use transport::FetchTransport;

// ========================
// Service Traits
// ========================

#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self, skip: u32, limit: u32) -> Result<Vec<Task>, ApiError>;
    async fn create_task(&self, title: &str) -> Result<Task, ApiError>;
    async fn update_task(&self, id: i64, completed: bool) -> Result<Task, ApiError>;
    async fn delete_task(&self, id: i64) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
pub trait AuthApi {
    async fn sign_in(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError>;
}

pub type SharedTaskApi = Arc<dyn TaskApi + Send + Sync>;

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Full `Authorization` header value
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

// ========================
// HTTP Client
// ========================

/// Join base URL and path without doubling or dropping the slash
fn join_url_segments(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Client for the task backend
pub struct HttpApi<T = FetchTransport> {
    base_url: String,
    session: Session,
    transport: T,
}

impl HttpApi<FetchTransport> {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self::with_transport(base_url, session, FetchTransport)
    }
}

impl<T: Transport> HttpApi<T> {
    pub fn with_transport(base_url: impl Into<String>, session: Session, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        join_url_segments(&self.base_url, path)
    }

    /// Request without credentials
    fn public(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> ApiRequest {
        ApiRequest {
            method,
            url: self.url(path),
            authorization: None,
            body,
        }
    }

    /// Request carrying the session's bearer token, when there is one
    fn authorized(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> ApiRequest {
        ApiRequest {
            authorization: self.session.authorization(),
            ..self.public(method, path, body)
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        debug!("{} {}", method.as_str(), url);

        let response = self.transport.send(request).await.map_err(|e| {
            warn!("{} {} failed: {}", method.as_str(), url, e);
            e
        })?;

        if !response.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.detail_text());
            warn!("{} {} returned {}", method.as_str(), url, response.status);
            return Err(ApiError::Status { status: response.status, detail });
        }
        Ok(response)
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Option<serde_json::Value>, ApiError> {
    serde_json::to_value(body).map(Some).map_err(ApiError::decode)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_segments() {
        assert_eq!(join_url_segments("http://localhost:8000/api", "/tasks"), "http://localhost:8000/api/tasks");
        assert_eq!(join_url_segments("http://localhost:8000/api/", "tasks"), "http://localhost:8000/api/tasks");
        assert_eq!(join_url_segments("http://localhost:8000/api/", "/"), "http://localhost:8000/api");
    }

    #[test]
    fn test_success_range() {
        assert!(ApiResponse { status: 200, body: String::new() }.is_success());
        assert!(ApiResponse { status: 204, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 302, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 401, body: String::new() }.is_success());
    }
}
