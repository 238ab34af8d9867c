//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Quote not found (HTTP 404 from the read endpoint)
    #[error("Quote not found: {0}")]
    QuoteNotFound(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out at the transport layer
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Server answered with a status the client has no mapping for
    #[error("Unexpected status: HTTP {status}")]
    UnexpectedStatus { status: u16 },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether this is expected behavior (user input, resource does not
    /// exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level
    /// `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::QuoteNotFound(_) | Self::ValidationError(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_expected() {
        assert!(CoreError::QuoteNotFound("q1".into()).is_expected());
    }

    #[test]
    fn validation_is_expected() {
        assert!(CoreError::ValidationError("empty quote".into()).is_expected());
    }

    #[test]
    fn network_is_unexpected() {
        assert!(!CoreError::NetworkError("refused".into()).is_expected());
    }

    #[test]
    fn unexpected_status_is_unexpected() {
        assert!(!CoreError::UnexpectedStatus { status: 500 }.is_expected());
    }
}
