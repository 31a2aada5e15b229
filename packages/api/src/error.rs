//! Error taxonomy for backend calls.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`ApiError::InvalidRequest`] | the request could not be built |
//! | [`ApiError::Unreachable`] | the request was sent but no response came back |
//! | [`ApiError::Server`] | the server answered with a non-2xx status |
//! | [`ApiError::Rejected`] | a 2xx envelope with `success: false` |
//! | [`ApiError::Decode`] | the body did not have the expected shape |
//!
//! Server-side failures carry the server's `message` when it sent one;
//! [`ApiResultExt::or_message`] fills in a per-operation fallback otherwise.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request could not be built: {0}")]
    InvalidRequest(String),

    #[error("Could not connect to the server")]
    Unreachable(#[source] reqwest::Error),

    #[error("{}", .message.as_deref().unwrap_or("Server error"))]
    Server {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("{}", .message.as_deref().unwrap_or("Request rejected by server"))]
    Rejected { message: Option<String> },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify an error raised by `reqwest` before a response was available.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Unreachable(e)
        }
    }

    /// The server-supplied message, if the server supplied one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } | Self::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for [`ApiError::Server`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when no response was received at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// True when the server answered but reported a failure.
    pub fn is_server_failure(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::Rejected { .. })
    }

    fn or_message(self, fallback: &str) -> Self {
        match self {
            Self::Server {
                status,
                message: None,
            } => Self::Server {
                status,
                message: Some(fallback.to_string()),
            },
            Self::Rejected { message: None } => Self::Rejected {
                message: Some(fallback.to_string()),
            },
            other => other,
        }
    }
}

/// Attach an operation-specific fallback message to server failures.
pub trait ApiResultExt<T> {
    fn or_message(self, fallback: &str) -> Result<T, ApiError>;
}

impl<T> ApiResultExt<T> for Result<T, ApiError> {
    fn or_message(self, fallback: &str) -> Result<T, ApiError> {
        self.map_err(|e| e.or_message(fallback))
    }
}
