//! Identity provider token handling
//!
//! The identity provider hands back three JWTs on a successful login. Only the
//! payload segment is read here; signatures are verified by the todo backend,
//! never by the client.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Raw tokens returned by a successful authentication
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
}

/// Claims read from the access token
#[derive(Debug, Deserialize)]
pub struct AccessClaims {
    pub username: Option<String>,
    pub exp: Option<i64>,
}

/// Claims read from the ID token
#[derive(Debug, Deserialize)]
pub struct IdClaims {
    pub name: Option<String>,
}

/// Decode the payload segment of a JWT into `T`
pub fn decode_claims<T: DeserializeOwned>(token: &str) -> Result<T> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => {
            return Err(Error::invalid_token(
                "expected three dot-separated segments",
            ))
        }
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| Error::invalid_token(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| Error::invalid_token(format!("payload is not a JSON object: {e}")))
}
