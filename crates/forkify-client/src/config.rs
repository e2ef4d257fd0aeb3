//! Client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for talking to the recipe API.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries after the first attempt for transient failures. 0 disables
    /// retrying.
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Delay before the first retry, in milliseconds. Later retries back
    /// off exponentially.
    #[serde(default = "default_retry_min_delay_ms")]
    pub retry_min_delay_ms: u64,

    /// Upper bound on the delay between retries, in milliseconds.
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://forkify-api.herokuapp.com/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> usize {
    2
}

fn default_retry_min_delay_ms() -> u64 {
    200
}

fn default_retry_max_delay_ms() -> u64 {
    2_000
}

fn default_user_agent() -> String {
    concat!("forkify/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_min_delay_ms: default_retry_min_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url`, defaults elsewhere.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Delay before the first retry.
    pub fn retry_min_delay(&self) -> Duration {
        Duration::from_millis(self.retry_min_delay_ms)
    }

    /// Maximum delay between retries.
    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms.max(self.retry_min_delay_ms))
    }

    /// Base URL with any trailing slashes removed.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

// ============================================================================
// Tests
// ============================================================================
