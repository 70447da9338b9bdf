//! Error types shared by the todo client crates

/// Standard result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid token: {message}")]
    InvalidToken { message: String },

    #[error("Token is missing the '{claim}' claim")]
    MissingClaim { claim: &'static str },

    #[error("Session storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an invalid token error
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
