//! HTTPS client for the DoH JSON API.
//!
//! One client is built at startup and shared by every in-flight request. It
//! pools connections per host, so keep a single instance alive rather than
//! building one per query.
//!
//! Wire format (HTTP):
//! ```text
//! GET /resolve?name=example.com&type=A HTTP/1.1
//! Accept: application/dns-json
//! ```

use doh_proxy_domain::DomainError;
use std::time::Duration;

/// Media type of the JSON flavour of DoH.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Build the shared upstream client.
///
/// `timeout` bounds the whole exchange: connect, request and body read.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .user_agent(concat!("doh-proxy/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DomainError::UpstreamRequest(format!("Failed to build HTTP client: {}", e)))
}
