//! Ride store client error types.

use std::fmt;

/// Errors from the hosted ride store client.
#[derive(Debug)]
pub enum StoreError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Store returned an error status code
    ApiError { status: u16, message: String },

    /// Ride not found (deleted, or not visible to this user)
    RideNotFound,

    /// Invalid API key or expired user token
    Unauthorized,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Http(e) => write!(f, "HTTP error: {e}"),
            StoreError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            StoreError::ApiError { status, message } => {
                write!(f, "store error {status}: {message}")
            }
            StoreError::RideNotFound => {
                write!(f, "ride not found (deleted, or not yours to touch)")
            }
            StoreError::Unauthorized => write!(f, "unauthorized (invalid key or expired token)"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Http(err)
    }
}
