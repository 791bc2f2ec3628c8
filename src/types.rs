//! Core types for arnie-quotes

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Wire key carrying the quote text of a successful result.
pub const SUCCESS_KEY: &str = "Arnie Quote";

/// Wire key carrying the reason text of a failed result.
pub const FAILURE_KEY: &str = "FAILURE";

/// The raw status/body pair produced by the transport collaborator for one
/// request.
///
/// The body is kept as a loose [`Value`] because the collaborator contract
/// only guarantees "textual", not "valid JSON", and a misbehaving transport
/// may hand back `Null`, a number, or an already-decoded structure. The
/// validator screens those out before anything is decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response payload as delivered by the transport
    pub body: Value,
}

impl RawResponse {
    /// Create a response from a status code and an arbitrary body value
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Create a response with a textual body
    pub fn from_text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Value::String(body.into()),
        }
    }
}

/// The tagged outcome of one quote request.
///
/// Exactly one `QuoteResult` exists per input URL, at the same ordinal
/// position in the output as its URL in the input. Results are immutable
/// once produced.
///
/// At the serialization boundary a result becomes an object with exactly one
/// of two keys ([`SUCCESS_KEY`] holding the quote, [`FAILURE_KEY`] holding
/// the reason), and deserialization accepts exactly that shape back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuoteResult {
    /// The endpoint returned a quote
    Success {
        /// The quote text; empty when the endpoint sent no message
        quote: String,
    },
    /// The request failed at some stage of the pipeline
    Failure {
        /// Human-readable description of what went wrong
        reason: String,
    },
}

impl QuoteResult {
    /// Returns `true` for the `Success` variant
    pub fn is_success(&self) -> bool {
        matches!(self, QuoteResult::Success { .. })
    }
}

impl Serialize for QuoteResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            QuoteResult::Success { quote } => map.serialize_entry(SUCCESS_KEY, quote)?,
            QuoteResult::Failure { reason } => map.serialize_entry(FAILURE_KEY, reason)?,
        }
        map.end()
    }
}

struct QuoteResultVisitor;

impl<'de> Visitor<'de> for QuoteResultVisitor {
    type Value = QuoteResult;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "an object with a single {SUCCESS_KEY:?} or {FAILURE_KEY:?} key"
        )
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let (key, value): (String, String) = map
            .next_entry()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let result = match key.as_str() {
            SUCCESS_KEY => QuoteResult::Success { quote: value },
            FAILURE_KEY => QuoteResult::Failure { reason: value },
            other => return Err(de::Error::unknown_field(other, &[SUCCESS_KEY, FAILURE_KEY])),
        };

        if map.next_key::<String>()?.is_some() {
            return Err(de::Error::custom("expected exactly one result key"));
        }

        Ok(result)
    }
}

impl<'de> Deserialize<'de> for QuoteResult {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(QuoteResultVisitor)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -----------------------------------------------------------------------
    // Wire shape: serialization
    // -----------------------------------------------------------------------

    #[test]
    fn success_serializes_to_single_arnie_quote_key() {
        let result = QuoteResult::Success {
            quote: "I'll be back".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value, json!({"Arnie Quote": "I'll be back"}));
        assert_eq!(
            value.as_object().unwrap().len(),
            1,
            "exactly one key on the wire"
        );
    }

    #[test]
    fn failure_serializes_to_single_failure_key() {
        let result = QuoteResult::Failure {
            reason: "Not Found".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value, json!({"FAILURE": "Not Found"}));
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn empty_quote_still_serializes_with_success_key() {
        let result = QuoteResult::Success {
            quote: String::new(),
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"Arnie Quote": ""})
        );
    }

    // -----------------------------------------------------------------------
    // Wire shape: deserialization
    // -----------------------------------------------------------------------

    #[test]
    fn success_deserializes_from_arnie_quote_key() {
        let result: QuoteResult =
            serde_json::from_str(r#"{"Arnie Quote": "Get to the chopper"}"#).unwrap();

        assert_eq!(
            result,
            QuoteResult::Success {
                quote: "Get to the chopper".to_string()
            }
        );
    }

    #[test]
    fn failure_deserializes_from_failure_key() {
        let result: QuoteResult = serde_json::from_str(r#"{"FAILURE": "timeout"}"#).unwrap();

        assert_eq!(
            result,
            QuoteResult::Failure {
                reason: "timeout".to_string()
            }
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = serde_json::from_str::<QuoteResult>(r#"{"quote": "nope"}"#);
        assert!(result.is_err(), "only the two wire keys are accepted");
    }

    #[test]
    fn empty_object_is_rejected() {
        assert!(serde_json::from_str::<QuoteResult>("{}").is_err());
    }

    #[test]
    fn object_with_two_keys_is_rejected() {
        let result = serde_json::from_str::<QuoteResult>(
            r#"{"Arnie Quote": "yes", "FAILURE": "also yes"}"#,
        );
        assert!(result.is_err(), "a result carries exactly one key");
    }

    // -----------------------------------------------------------------------
    // RawResponse constructors
    // -----------------------------------------------------------------------

    #[test]
    fn from_text_wraps_body_as_string_value() {
        let response = RawResponse::from_text(200, r#"{"message":"hi"}"#);

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Value::String(r#"{"message":"hi"}"#.into()));
    }

    #[test]
    fn new_accepts_non_textual_bodies() {
        let response = RawResponse::new(200, Value::Null);
        assert_eq!(response.body, Value::Null);

        let response = RawResponse::new(200, json!(42));
        assert_eq!(response.body, json!(42));
    }
}
