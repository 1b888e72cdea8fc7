// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error classification for marketplace network calls
//!
//! Every failure a caller can observe is one of the variants below. The
//! client never retries internally; [`NetworkError::is_retryable`] tells
//! callers which failures are worth retrying on their own schedule.

use thiserror::Error;

/// Errors surfaced by [`crate::NetworkClient`]
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Server responded outside the [200, 300) success range
    #[error("server returned HTTP status {0}")]
    HttpStatus(u16),

    /// Transport-layer failure after a connection was established
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// No response could be obtained from the server at all
    #[error("server unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Request exceeded the configured deadline
    #[error("request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// Response body did not decode into the expected type
    #[error("response parsing failed: {0}")]
    Parsing(#[source] serde_json::Error),

    /// Server answered with a success status but no body
    #[error("response had an empty body")]
    EmptyResponse,

    /// Request descriptor carried no endpoint URL
    #[error("request has no endpoint")]
    MissingEndpoint,

    /// Request payload failed to serialize
    #[error("payload encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Client configuration was invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl NetworkError {
    /// Whether retrying the call might succeed.
    ///
    /// Transient failures: the server was unreachable, the request timed
    /// out, the server throttled us, or it reported an internal error.
    /// Everything else is deterministic and a retry would only repeat it.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::Unreachable(_) | NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus(code) => *code == 429 || (500..600).contains(code),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_statuses() {
        assert!(NetworkError::HttpStatus(429).is_retryable());
        assert!(NetworkError::HttpStatus(500).is_retryable());
        assert!(NetworkError::HttpStatus(503).is_retryable());
        assert!(!NetworkError::HttpStatus(404).is_retryable());
        assert!(!NetworkError::HttpStatus(401).is_retryable());
    }

    #[test]
    fn deterministic_failures_are_not_retryable() {
        assert!(!NetworkError::MissingEndpoint.is_retryable());
        assert!(!NetworkError::EmptyResponse.is_retryable());
        assert!(!NetworkError::Config("bad".to_string()).is_retryable());
        assert!(NetworkError::Timeout { seconds: 30 }.is_retryable());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            NetworkError::HttpStatus(404).to_string(),
            "server returned HTTP status 404"
        );
        assert_eq!(
            NetworkError::Timeout { seconds: 30 }.to_string(),
            "request timed out after 30 seconds"
        );
        assert_eq!(
            NetworkError::MissingEndpoint.to_string(),
            "request has no endpoint"
        );
    }
}
