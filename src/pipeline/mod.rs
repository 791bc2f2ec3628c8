//! The quote pipeline: concurrent fan-out with per-request error isolation.
//!
//! Split into focused submodules:
//! - [`validate`] - Body presence/type screening before decoding
//! - [`classify`] - Success-vs-failure selection from the status code
//! - [`normalize`] - Decoded bodies and caught errors become results
//!
//! Each input URL gets one independent task running the full
//! fetch, validate, decode, classify sequence. Errors are folded into
//! `Failure` results inside the task, so the join layer only ever aggregates
//! resolved values: the batch as a whole cannot fail, and a failing request
//! cannot disturb its siblings.

mod classify;
mod normalize;
mod validate;


use crate::error::Result;
use crate::transport::Transport;
use crate::types::QuoteResult;
use futures::future;

/// Fetch one quote per URL, concurrently, preserving input order.
///
/// All requests are started together with no sequencing dependency between
/// them, and the call suspends until every one has settled. The output length
/// always equals the input length and `results[i]` corresponds to `urls[i]`
/// no matter which request finishes first. A failing request never cancels
/// its siblings.
pub async fn fetch_quotes<S>(transport: &dyn Transport, urls: &[S]) -> Vec<QuoteResult>
where
    S: AsRef<str>,
{
    tracing::debug!(count = urls.len(), "dispatching quote batch");

    future::join_all(urls.iter().map(|url| fetch_quote(transport, url.as_ref()))).await
}

/// Run the per-request state machine for a single URL.
///
/// Always resolves to a result: any error along the way is converted into a
/// `Failure` carrying its reason text.
async fn fetch_quote(transport: &dyn Transport, url: &str) -> QuoteResult {
    match try_fetch_quote(transport, url).await {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(url = %url, error = %err, "quote request failed");
            normalize::failure_from_error(&err)
        }
    }
}

/// The fallible stages: transport fetch, body validation, JSON decode,
/// status classification.
async fn try_fetch_quote(transport: &dyn Transport, url: &str) -> Result<QuoteResult> {
    let response = transport.http_get(url).await?;
    let body = validate::parseable_body(&response)?;
    let decoded: normalize::DecodedBody = serde_json::from_str(body)?;

    Ok(match classify::classify(response.status) {
        classify::StatusClass::Ok => normalize::success(decoded),
        classify::StatusClass::Failed => normalize::failure(decoded),
    })
}
