//! Auth Endpoints

use async_trait::async_trait;

use super::{to_body, AuthApi, HttpApi, Method, Transport};
use crate::error::ApiError;
use crate::models::{Credentials, TokenResponse};

impl<T: Transport> HttpApi<T> {
    async fn post_credentials(&self, path: &str, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = to_body(&Credentials { email, password })?;
        let response = self.execute(self.public(Method::Post, path, body)).await?;
        serde_json::from_str(&response.body).map_err(ApiError::decode)
    }
}

#[async_trait(?Send)]
impl<T: Transport> AuthApi for HttpApi<T> {
    async fn sign_in(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.post_credentials("/auth/sign-in", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.post_credentials("/auth/sign-up", email, password).await
    }
}
