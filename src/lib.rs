//! # arnie-quotes
//!
//! Concurrent quote fetching with per-request error isolation.
//!
//! Given a list of endpoint URLs, the library fetches all of them
//! concurrently and returns one tagged result per URL (a quote on success,
//! a normalized failure description otherwise) without ever letting one
//! endpoint's error abort the batch.
//!
//! ## Design Philosophy
//!
//! - **Error isolation** - a failure inside one request's processing is
//!   converted into that request's `Failure` result; the batch operation
//!   itself never fails and never loses a sibling's result
//! - **Order preservation** - `results[i]` always corresponds to `urls[i]`,
//!   regardless of which request finishes first
//! - **Library-first** - no CLI or UI, purely a Rust crate for embedding
//! - **Pluggable transport** - the HTTP collaborator sits behind a trait, so
//!   tests and embedders can inject their own
//!
//! ## Quick Start
//!
//! ```no_run
//! use arnie_quotes::{Config, QuoteFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = QuoteFetcher::new(Config::default())?;
//!
//!     let results = fetcher
//!         .get_arnie_quotes(&[
//!             "http://localhost:8000/quote/1".to_string(),
//!             "http://localhost:8000/quote/2".to_string(),
//!         ])
//!         .await;
//!
//!     for result in &results {
//!         println!("{}", serde_json::to_string(result)?);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Transport configuration
pub mod config;
/// Error types
pub mod error;
/// The fan-out/classify/normalize pipeline
pub mod pipeline;
/// The transport collaborator seam and its HTTP implementation
pub mod transport;
/// Core types and their wire serialization
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use transport::{HttpTransport, Transport};
pub use types::{FAILURE_KEY, QuoteResult, RawResponse, SUCCESS_KEY};

use std::sync::Arc;

/// Entry point for fetching quote batches.
///
/// Owns the transport collaborator; cheap to clone and safe to share across
/// tasks. Construct with [`QuoteFetcher::new`] for the production HTTP
/// transport, or [`QuoteFetcher::with_transport`] to inject another
/// [`Transport`] implementation.
#[derive(Clone)]
pub struct QuoteFetcher {
    transport: Arc<dyn Transport>,
}

impl QuoteFetcher {
    /// Create a fetcher backed by the production HTTP transport
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(&config)?),
        })
    }

    /// Create a fetcher over a caller-provided transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch one quote per URL, concurrently, preserving input order.
    ///
    /// All requests start together and the call suspends until every one has
    /// settled. This operation never fails as a whole: each entry of the
    /// returned sequence is either a `Success` with the quote text or a
    /// `Failure` with a normalized reason, and the only way to detect which
    /// requests failed is to inspect each entry's tag.
    pub async fn get_arnie_quotes<S>(&self, urls: &[S]) -> Vec<QuoteResult>
    where
        S: AsRef<str>,
    {
        pipeline::fetch_quotes(self.transport.as_ref(), urls).await
    }
}

/// Fetch quotes with a default-configured HTTP transport.
///
/// Convenience wrapper over [`QuoteFetcher`] for one-off batches.
///
/// # Errors
///
/// The only error case is constructing the HTTP client; the batch itself
/// always resolves to a full-length result sequence.
pub async fn get_arnie_quotes<S>(urls: &[S]) -> Result<Vec<QuoteResult>>
where
    S: AsRef<str>,
{
    let fetcher = QuoteFetcher::new(Config::default())?;
    Ok(fetcher.get_arnie_quotes(urls).await)
}
