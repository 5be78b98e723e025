use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_UPSTREAM_URL: &str = "https://dns.google.com/resolve";

/// Upstream DoH JSON endpoint. Queried as `<url>?name=<domain>&type=<qtype>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_url")]
    pub url: String,

    /// Whole-request timeout in seconds (connect, send and body read).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
