//! Todo API and identity provider clients

pub mod error;
pub mod identity;
pub mod todos;
pub mod typed;

pub use error::ClientError;
pub use identity::IdentityClient;
pub use typed::{AuthenticatedTodoClient, TypedClientBuilder};

use reqwest::{ClientBuilder, Response};
use std::time::Duration;

const USER_AGENT: &str = "todo-client/0.1.0";

/// Build the underlying HTTP client
fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

/// Turn a non-success response into a [`ClientError`]
async fn error_for_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_else(|_| status.to_string());
    Err(ClientError::from_status(status, message))
}
