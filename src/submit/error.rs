//! Submission-specific error types.

/// Errors that can occur while sending a field definition.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Endpoint is not a valid absolute http(s) URL
    #[error("Invalid submission endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_display() {
        let error = SubmitError::InvalidEndpoint {
            endpoint: "ftp://example.com".to_string(),
            message: "unsupported scheme".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("Invalid submission endpoint"));
        assert!(error_str.contains("ftp://example.com"));
        assert!(error_str.contains("unsupported scheme"));
    }
}
