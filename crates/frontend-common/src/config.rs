//! Frontend configuration
//!
//! Values are fixed at build time from the environment, falling back to
//! local development defaults.

use todo_core::config::{DEFAULT_API_BASE_URL, DEFAULT_IDENTITY_REGION};
use todo_core::{ClientConfig, IdentityConfig};

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Todo API base URL (`TODO_API_GATEWAY`)
    pub const API_GATEWAY: &'static str = match option_env!("TODO_API_GATEWAY") {
        Some(url) => url,
        None => DEFAULT_API_BASE_URL,
    };

    /// Identity provider region (`TODO_COGNITO_REGION`)
    pub const COGNITO_REGION: &'static str = match option_env!("TODO_COGNITO_REGION") {
        Some(region) => region,
        None => DEFAULT_IDENTITY_REGION,
    };

    /// User pool app client id (`TODO_COGNITO_CLIENT_ID`)
    pub const COGNITO_CLIENT_ID: &'static str = match option_env!("TODO_COGNITO_CLIENT_ID") {
        Some(client_id) => client_id,
        None => "",
    };

    /// Optional identity endpoint override (`TODO_COGNITO_ENDPOINT`)
    pub const COGNITO_ENDPOINT: Option<&'static str> = option_env!("TODO_COGNITO_ENDPOINT");

    /// Client configuration assembled from the build-time values
    pub fn client_config() -> ClientConfig {
        ClientConfig {
            api_base_url: Self::API_GATEWAY.to_string(),
            identity: IdentityConfig {
                region: Self::COGNITO_REGION.to_string(),
                client_id: Self::COGNITO_CLIENT_ID.to_string(),
                endpoint: Self::COGNITO_ENDPOINT.map(str::to_string),
            },
        }
    }
}
