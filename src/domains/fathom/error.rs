//! Fathom API client errors.

use thiserror::Error;

/// Errors raised by [`FathomClient`](super::FathomClient).
///
/// Only [`FathomError::Api`] describes a response the remote service chose to
/// send; every other variant is a local or transport-level failure.
#[derive(Debug, Error)]
pub enum FathomError {
    /// The client was constructed without a credential.
    #[error("Fathom API key is required")]
    MissingApiKey,

    /// The API answered with a non-success status.
    #[error("Fathom API Error ({status}): {message}")]
    Api {
        message: String,
        status: u16,
        code: Option<i64>,
    },

    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("Request to Fathom failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body that is not the expected JSON.
    #[error("Invalid response from Fathom: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot address API endpoints.
    #[error("Invalid Fathom base URL: {0}")]
    InvalidUrl(String),

    /// Query parameters could not be form-encoded.
    #[error("Failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl FathomError {
    /// Create a remote API error.
    pub fn api(message: impl Into<String>, status: u16, code: Option<i64>) -> Self {
        Self::Api {
            message: message.into(),
            status,
            code,
        }
    }

    /// HTTP status of a remote API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the remote service rejected the request (as opposed to a
    /// local or network failure).
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
