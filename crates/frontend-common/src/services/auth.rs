//! Login and signup

use crate::client::{create_identity_client, ClientError};
use todo_core::Session;
use todo_http::types::SignUpResponse;

/// Identity provider service
#[derive(Clone, Default)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Log in and return the assembled session; the caller persists it
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let client = create_identity_client()?;
        client.login(email, password).await
    }

    /// Register a new user.
    ///
    /// Notification opt-in has no backend yet; it is only recorded in the log.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        notifications: bool,
    ) -> Result<SignUpResponse, ClientError> {
        let client = create_identity_client()?;
        let response = client.sign_up(email, password, name).await?;
        if notifications {
            tracing::info!(user_sub = %response.user_sub, "Notifications requested");
        }
        Ok(response)
    }
}
