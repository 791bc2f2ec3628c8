//! Result normalization: decoded bodies and caught errors become results.

use crate::error::Error;
use crate::types::QuoteResult;
use serde::Deserialize;

/// The decoded shape of a quote endpoint's JSON body.
///
/// Only `message` is read; unknown fields are ignored. A `message` that is
/// absent or JSON null defaults to empty text downstream. A present
/// non-string `message` is a type error under this definition and takes the
/// decode-failure path instead of silently collapsing to empty text.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DecodedBody {
    /// The quote (on success) or the failure description (on non-200)
    #[serde(default)]
    pub message: Option<String>,
}

/// Build the success result for a 200 response.
pub(crate) fn success(body: DecodedBody) -> QuoteResult {
    QuoteResult::Success {
        quote: body.message.unwrap_or_default(),
    }
}

/// Build the failure result for a decodable non-200 response.
pub(crate) fn failure(body: DecodedBody) -> QuoteResult {
    QuoteResult::Failure {
        reason: body.message.unwrap_or_default(),
    }
}

/// Fold a caught error into a failure result (the error-isolation path).
pub(crate) fn failure_from_error(err: &Error) -> QuoteResult {
    QuoteResult::Failure {
        reason: err.failure_reason(),
    }
}
