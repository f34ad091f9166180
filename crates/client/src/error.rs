//! Client error types.

use printnode_core::{EnvelopeError, ValidationError};
use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No per-call key and no default key. Raised before any network I/O.
    #[error("PrintNode API key not set")]
    MissingApiKey,

    /// Caller data failed a local precondition. Raised before any network I/O.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request could not be built, e.g. a header value with control characters.
    #[error("Failed to build request: {0}")]
    Http(#[from] http::Error),

    /// Non-success status whose body carried a `message`.
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Non-success status without a readable error body.
    #[error("Server returned {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

impl ClientError {
    /// Maps a non-success response to an error, keeping the remote message if
    /// the body is a JSON envelope with a string `message`.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => ClientError::Api {
                status,
                message: envelope.message,
            },
            Err(_) => ClientError::Status { status },
        }
    }

    /// The remote HTTP status, for errors that came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Status { status } => Some(*status),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for errors raised before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::MissingApiKey | ClientError::Validation(_) | ClientError::Http(_)
        )
    }
}
