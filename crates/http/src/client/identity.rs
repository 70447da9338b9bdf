//! Identity provider client (Cognito user pool JSON API)
//!
//! Login uses the `USER_PASSWORD_AUTH` flow, so the user pool app client
//! must have it enabled. Failures reported by the provider come back as
//! [`ClientError::Identity`], whose message is the provider's own text.

use super::{build_http_client, ClientError};
use crate::types::{
    AuthParameters, IdentityErrorBody, InitiateAuthRequest, InitiateAuthResponse, SignUpRequest,
    SignUpResponse, UserAttribute, USER_PASSWORD_AUTH,
};
use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use todo_core::{AuthTokens, IdentityConfig, Session};

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const AMZ_TARGET: &str = "X-Amz-Target";
const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";

/// Client for login and signup against the identity provider
#[derive(Clone)]
pub struct IdentityClient {
    client: reqwest::Client,
    endpoint: String,
    client_id: String,
}

impl IdentityClient {
    /// Create a client for the configured user pool app client
    pub fn new(config: &IdentityConfig) -> Result<Self, ClientError> {
        Self::new_with_timeout(config, None)
    }

    /// Create a client with an optional request timeout (ignored on WASM)
    pub fn new_with_timeout(
        config: &IdentityConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        if config.client_id.trim().is_empty() {
            return Err(ClientError::Configuration(
                "identity client_id is required".into(),
            ));
        }

        Ok(Self {
            client: build_http_client(timeout)?,
            endpoint: config.endpoint_url(),
            client_id: config.client_id.clone(),
        })
    }

    /// Exchange email and password for tokens
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ClientError> {
        let request = InitiateAuthRequest {
            auth_flow: USER_PASSWORD_AUTH.to_string(),
            client_id: self.client_id.clone(),
            auth_parameters: AuthParameters {
                username: email.to_string(),
                password: password.to_string(),
            },
        };
        let response: InitiateAuthResponse = self.call("InitiateAuth", &request).await?;

        match (response.authentication_result, response.challenge_name) {
            (Some(result), _) => Ok(AuthTokens {
                access_token: result.access_token,
                id_token: result.id_token,
                refresh_token: result.refresh_token.unwrap_or_default(),
            }),
            (None, Some(challenge)) => Err(ClientError::Challenge(challenge)),
            (None, None) => Err(ClientError::AuthenticationFailed(
                "identity provider returned no tokens".into(),
            )),
        }
    }

    /// Log in and assemble the resulting session
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let tokens = self.authenticate(email, password).await?;
        let session = Session::from_tokens(tokens)?;
        tracing::info!(user_id = %session.user_id, "Login successful");
        Ok(session)
    }

    /// Register a new user with a `name` attribute
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<SignUpResponse, ClientError> {
        let request = SignUpRequest {
            client_id: self.client_id.clone(),
            username: email.to_string(),
            password: password.to_string(),
            user_attributes: vec![UserAttribute {
                name: "name".to_string(),
                value: name.to_string(),
            }],
        };
        let response: SignUpResponse = self.call("SignUp", &request).await?;
        tracing::info!(
            user_sub = %response.user_sub,
            confirmed = response.user_confirmed,
            "Sign-up accepted"
        );
        Ok(response)
    }

    async fn call<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        operation: &str,
        body: &Req,
    ) -> Result<Resp, ClientError> {
        tracing::debug!(operation, "Calling identity provider");
        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .header(header::CONTENT_TYPE, AMZ_JSON)
            .header(AMZ_TARGET, format!("{TARGET_PREFIX}.{operation}"))
            .body(serde_json::to_vec(body)?)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        match serde_json::from_slice::<IdentityErrorBody>(&bytes) {
            Ok(error) if !error.message.is_empty() => {
                tracing::warn!(
                    operation,
                    code = error.code(),
                    "Identity provider rejected request"
                );
                Err(ClientError::Identity {
                    code: error.code().to_string(),
                    message: error.message,
                })
            }
            _ => Err(ClientError::from_status(
                status,
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
        }
    }
}
