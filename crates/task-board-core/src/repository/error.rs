//! Remote store errors.
//!
//! `Display` yields the message the user sees in an alert, so service
//! errors render the server's text verbatim.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Parse error code for a missing object
pub const OBJECT_NOT_FOUND: i64 = 101;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The request never got a response (DNS, TLS, connection reset...)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with an error body
    #[error("{message}")]
    Service { code: i64, message: String },

    /// No record matched the lookup
    #[error("{message}")]
    NotFound { message: String },

    /// The store answered with something we could not decode
    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    /// The client could not be built from its configuration
    #[error("store configuration error: {reason}")]
    Config { reason: String },
}

impl StoreError {
    pub fn service(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == OBJECT_NOT_FOUND {
            return Self::NotFound { message };
        }
        Self::Service { code, message }
    }

    pub fn not_found() -> Self {
        Self::NotFound {
            message: "Object not found.".to_string(),
        }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
