//! Error types for the Konbini client.

use konbini_core::MapperError;
use serde::{Deserialize, Serialize};

/// Result type for client operations.
pub type KonbiniResult<T> = Result<T, KonbiniError>;

/// Error types that can occur when talking to ShotGrid.
#[derive(Debug, thiserror::Error)]
pub enum KonbiniError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// ShotGrid reported an exception for the RPC call.
    #[error("ShotGrid fault (code {error_code}): {message}")]
    Fault { error_code: i64, message: String },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required credential is neither passed in nor set in the environment.
    #[error("Missing {param} value. Use either the {env_var} environment variable or the {param} param.")]
    MissingValue {
        param: &'static str,
        env_var: &'static str,
    },

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record could not be mapped to its model.
    #[error(transparent)]
    Mapper(#[from] MapperError),

    /// The response did not have the expected shape.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid input, e.g. updating an entity that has no id.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl KonbiniError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => matches!(*status, 429 | 502..=504),
            _ => false,
        }
    }

    /// Check if this error was raised by the remote side.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::Fault { .. } | Self::UnexpectedResponse(_)
        )
    }

    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(fault) = serde_json::from_str::<FaultResponse>(body) {
            Self::Api {
                status,
                message: fault.message,
            }
        } else {
            Self::Api {
                status,
                message: body.to_string(),
            }
        }
    }
}

/// Exception payload returned by the RPC endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct FaultResponse {
    #[serde(default)]
    pub exception: bool,
    pub message: String,
    #[serde(default)]
    pub error_code: i64,
}
