//! API Error Type

use thiserror::Error;

/// Failure surfaced by any REST call. Every variant renders as one
/// human-readable line in the view's error slot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never completed
    #[error("{0}")]
    Network(String),
    /// The response body did not match the expected shape
    #[error("{0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn status_errors_name_the_http_code() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
        assert_eq!(ApiError::Status(500).to_string(), "HTTP 500");
    }

    #[test]
    fn network_errors_pass_the_message_through() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }
}
