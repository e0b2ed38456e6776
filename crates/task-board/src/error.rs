//! Error type for the task-board crate.

use thiserror::Error;

/// Failures surfaced by API calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, or a preview of the body.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("invalid response body: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },

    /// The base URL and path did not form a valid URL.
    #[error("invalid URL: {message}")]
    Url {
        /// Description of the URL failure.
        message: String,
    },
}

impl ClientError {
    /// Server-provided message for API errors, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}
