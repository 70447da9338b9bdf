//! Client configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Todo API base URL used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Identity provider region used when none is configured
pub const DEFAULT_IDENTITY_REGION: &str = "us-east-1";

/// Endpoints and identifiers the client talks to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub identity: IdentityConfig,
}

/// Managed identity provider (Cognito user pool app client)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub region: String,
    pub client_id: String,
    /// Overrides the regional endpoint, e.g. for a local emulator
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl IdentityConfig {
    /// URL identity requests are posted to
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com/", self.region),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            identity: IdentityConfig {
                region: DEFAULT_IDENTITY_REGION.to_string(),
                client_id: String::new(),
                endpoint: None,
            },
        }
    }
}

impl ClientConfig {
    /// Check that every endpoint parses and required identifiers are set
    pub fn validate(&self) -> Result<()> {
        validators::validate_url(&self.api_base_url, "api_base_url")?;
        validators::validate_not_empty(&self.identity.client_id, "identity.client_id")?;
        if self.identity.endpoint.is_none() {
            validators::validate_not_empty(&self.identity.region, "identity.region")?;
        }
        validators::validate_url(&self.identity.endpoint_url(), "identity.endpoint")?;
        Ok(())
    }
}

/// Common validation helpers
pub mod validators {
    use crate::error::{Error, Result};

    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::configuration(format!("{field}: cannot be empty")));
        }
        Ok(())
    }

    /// Validate URL format
    pub fn validate_url(value: &str, field: &str) -> Result<()> {
        url::Url::parse(value)
            .map_err(|e| Error::configuration(format!("{field}: invalid URL - {e}")))?;
        Ok(())
    }
}
