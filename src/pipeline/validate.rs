//! Response body validation.

use crate::error::{Error, Result};
use crate::types::RawResponse;

/// Return the body text iff the response body is present and textual.
///
/// The transport contract only guarantees "textual", so only text reaches the
/// decoder: JSON null, numbers, booleans, arrays, and already-decoded objects
/// are all rejected as malformed.
pub(crate) fn parseable_body(response: &RawResponse) -> Result<&str> {
    response.body.as_str().ok_or(Error::MalformedBody)
}
