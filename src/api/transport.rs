//! Browser Fetch Transport

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::ApiError;

/// Sends requests with the browser's `fetch` via `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = builder(request.method, &request.url);
        if let Some(value) = &request.authorization {
            builder = builder.header("Authorization", value);
        }

        let response = match &request.body {
            Some(body) => builder.json(body).map_err(ApiError::network)?.send().await,
            None => builder.send().await,
        }
        .map_err(ApiError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;
        Ok(ApiResponse { status, body })
    }
}
