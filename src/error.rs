//! Error types for arnie-quotes
//!
//! Every error here is recovered locally inside the per-request pipeline and
//! converted into a `Failure` result; none ever propagates to the batch
//! caller. The `Display` form of each variant is exactly the reason text that
//! surfaces in the corresponding `Failure`.

use thiserror::Error;

/// Result type alias for arnie-quotes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reason text for a failure that carries no message of its own.
pub(crate) const UNHANDLED_ERROR_REASON: &str = "Unhandled error";

/// Reason text for a response whose body is absent or not textual.
pub(crate) const MALFORMED_BODY_REASON: &str = "Malformed body in response";

/// Main error type for arnie-quotes
///
/// Covers the three ways a single quote request can fail before a result can
/// be classified: the transport call itself, a structurally unusable body,
/// and a body that is not valid JSON.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport collaborator failed before producing a response
    #[error("{}", .message.as_deref().unwrap_or(UNHANDLED_ERROR_REASON))]
    Transport {
        /// Human-readable description of the transport failure, or `None`
        /// when the failure carried no message at all
        message: Option<String>,
    },

    /// Response body absent or not textual
    #[error("{MALFORMED_BODY_REASON}")]
    MalformedBody,

    /// Body text was not valid JSON
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Create a transport error carrying a message
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport {
            message: Some(message.into()),
        }
    }

    /// The reason text surfaced in a `Failure` result for this error
    ///
    /// This is the canonical normalization of the error taxonomy:
    /// message-bearing failures surface their message, a malformed body
    /// surfaces the fixed malformed-body text, and a message-free failure
    /// surfaces the fixed unhandled-error text.
    pub fn failure_reason(&self) -> String {
        self.to_string()
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_with_message_uses_message_as_reason() {
        let err = Error::transport("timeout");
        assert_eq!(err.failure_reason(), "timeout");
    }

    #[test]
    fn transport_without_message_uses_unhandled_error() {
        let err = Error::Transport { message: None };
        assert_eq!(err.failure_reason(), "Unhandled error");
    }

    #[test]
    fn malformed_body_uses_fixed_reason_text() {
        assert_eq!(
            Error::MalformedBody.failure_reason(),
            "Malformed body in response"
        );
    }

    #[test]
    fn decode_error_surfaces_serde_message() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let expected = serde_err.to_string();
        let err = Error::from(serde_err);

        assert_eq!(err.failure_reason(), expected);
        assert!(
            err.failure_reason().contains("line 1"),
            "serde_json errors carry a position, got: {}",
            err.failure_reason()
        );
    }

    #[test]
    fn display_matches_failure_reason_for_every_variant() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let variants = vec![
            Error::transport("connection refused"),
            Error::Transport { message: None },
            Error::MalformedBody,
            Error::Decode(serde_err),
        ];

        for err in variants {
            assert_eq!(
                err.to_string(),
                err.failure_reason(),
                "Display and failure_reason must agree"
            );
        }
    }
}
