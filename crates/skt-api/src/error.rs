//! Request error type.

use thiserror::Error;

/// Uniform failure of a backend call.
///
/// Every variant renders as a message fit for a notification; the variant
/// tells callers which layer failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a response (connection, TLS, timeout).
    #[error("{message}")]
    Transport { message: String },

    /// The response body was not the JSON the caller expected.
    #[error("invalid response: {message}")]
    Decode { message: String },

    /// The backend answered with a status outside 200..=299.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl RequestError {
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        Self::transport(error.to_string())
    }
}
