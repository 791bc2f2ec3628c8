//! The transport collaborator seam: one HTTP GET per quote request.
//!
//! The pipeline only assumes a transport call may resolve to a raw
//! status/body pair or fail; connection handling, timeouts, and anything else
//! below that line belong to the implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::RawResponse;
use async_trait::async_trait;
use serde_json::Value;

/// A collaborator that fetches one URL and produces a raw response.
///
/// Implementations may resolve to a [`RawResponse`] or fail with a
/// transport-level [`Error`]; the pipeline converts any failure into a
/// `Failure` result rather than letting it abort the batch.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform an HTTP GET against `url`
    async fn http_get(&self, url: &str) -> Result<RawResponse>;
}

/// Production transport backed by a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from the given configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn http_get(&self, url: &str) -> Result<RawResponse> {
        let response = self.client.get(url).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                format!("Timeout fetching quote from '{}'", url)
            } else if e.is_connect() {
                format!("Connection failed for '{}': {}", url, e)
            } else {
                format!("Request to '{}' failed: {}", url, e)
            };
            Error::transport(message)
        })?;

        let status = response.status().as_u16();

        // Body text is read regardless of status; non-200 bodies still carry
        // the failure description the normalizer reads.
        let body = response.text().await.map_err(|e| {
            Error::transport(format!("Failed to read response body from '{}': {}", url, e))
        })?;

        tracing::debug!(url = %url, status = status, "transport fetch complete");

        Ok(RawResponse {
            status,
            body: Value::String(body),
        })
    }
}
