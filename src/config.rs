//! Configuration types for arnie-quotes

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP transport configuration
///
/// Configures the production [`HttpTransport`](crate::transport::HttpTransport)
/// only; the quote pipeline itself has no tunables. Works out of the box via
/// [`Default`], with every field individually overridable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Timeout applied to each HTTP request (default: 30 seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,

    /// User-Agent header sent with each request (default: `arnie-quotes/<version>`)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("arnie-quotes/", env!("CARGO_PKG_VERSION")).to_string()
}
