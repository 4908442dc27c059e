use thiserror::Error;

/// Why an outbound call to the answer API did not succeed.
///
/// The conversation controller folds every variant into a failed exchange
/// with a fixed user-facing message; the detail only reaches the logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AskError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with HTTP {code}")]
    Status { code: u16 },

    #[error("request timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors related to client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint '{0}': expected an http(s) URL")]
    InvalidEndpoint(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_error_display() {
        let err = AskError::Status { code: 500 };
        assert_eq!(err.to_string(), "server responded with HTTP 500");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidEndpoint("ftp://x".to_string());
        assert!(err.to_string().contains("ftp://x"));
    }
}
