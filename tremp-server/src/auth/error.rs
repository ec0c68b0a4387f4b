//! Identity provider error types.

/// Errors that can occur when verifying a user token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token is missing, expired, or revoked
    #[error("unauthorized: token rejected by the identity provider")]
    Unauthorized,

    /// Provider returned an error status
    #[error("auth provider error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the provider response
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AuthError::Unauthorized;
        assert_eq!(
            err.to_string(),
            "unauthorized: token rejected by the identity provider"
        );

        let err = AuthError::Api {
            status: 503,
            message: "down".into(),
        };
        assert_eq!(err.to_string(), "auth provider error 503: down");
    }
}
