//! Client configuration and initialization

use crate::config::AppConfig;
use once_cell::sync::Lazy;
use std::sync::Mutex;
use todo_core::Session;
pub use todo_http::client::error::ClientError;
use todo_http::client::{AuthenticatedTodoClient, IdentityClient, TypedClientBuilder};

/// Identity client shared by the login and signup views
static IDENTITY_CLIENT: Lazy<Mutex<Option<IdentityClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the identity client, creating it on first use
pub fn create_identity_client() -> Result<IdentityClient, ClientError> {
    let mut client_lock = IDENTITY_CLIENT
        .lock()
        .map_err(|_| ClientError::Configuration("identity client lock poisoned".into()))?;

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let config = AppConfig::client_config();
    let client = IdentityClient::new(&config.identity)?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Todo API client authorized with the session's ID token
pub fn create_todo_client(session: &Session) -> Result<AuthenticatedTodoClient, ClientError> {
    TypedClientBuilder::new()
        .base_url(AppConfig::API_GATEWAY)
        .build_authenticated(session.id_token.as_str())
}
