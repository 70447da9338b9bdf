//! Todo API client that cannot be built without a bearer token

use super::{build_http_client, error_for_status, ClientError};
use reqwest::header;
use std::time::Duration;

/// Client for the todo API; every request carries `Authorization: Bearer`
#[derive(Clone)]
pub struct AuthenticatedTodoClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl AuthenticatedTodoClient {
    /// Create a new authenticated client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, token, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let token = token.into();
        if token.is_empty() {
            return Err(ClientError::Configuration("bearer token is empty".into()));
        }

        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
            token,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = error_for_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Execute a request whose response body carries nothing of interest
    pub async fn execute_unit(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        error_for_status(request.send().await?).await?;
        Ok(())
    }
}

/// Builder for [`AuthenticatedTodoClient`]
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a client sending `token` as its bearer credential
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedTodoClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        AuthenticatedTodoClient::new_with_timeout(base_url, token, self.timeout)
    }
}
