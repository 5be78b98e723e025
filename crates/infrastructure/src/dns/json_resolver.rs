//! Resolver backed by a DoH JSON endpoint (`dns.google.com/resolve` style).
//!
//! ```text
//! GET <base>?name=<domain>&type=<qtype>
//! ```
//!
//! The response body is parsed into [`Resolution`] whatever the HTTP status:
//! a JSON error document simply carries no `Question`/`Answer` sections.

use crate::dns::transport::https::{build_http_client, DNS_JSON_CONTENT_TYPE};
use async_trait::async_trait;
use doh_proxy_application::ports::UpstreamResolver;
use doh_proxy_domain::config::UpstreamConfig;
use doh_proxy_domain::{DnsLookup, DomainError, Resolution};
use reqwest::Url;
use tracing::{debug, info};

pub struct JsonDohResolver {
    base_url: Url,
    client: reqwest::Client,
}

impl JsonDohResolver {
    /// Wrap an existing client. The client's own timeout applies to every query.
    pub fn new(base_url: &str, client: reqwest::Client) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DomainError::InvalidUpstreamUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let client = build_http_client(config.timeout())?;
        Self::new(&config.url, client)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch(&self, url: Url) -> Result<Vec<u8>, DomainError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, DNS_JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::QueryTimeout
            } else {
                DomainError::UnreadableResponse(format!(
                    "Failed to read response from {}: {}",
                    self.base_url,
                    error_chain(&e)
                ))
            }
        })?;

        debug!(
            upstream = %self.base_url,
            status = status.as_u16(),
            response_len = body.len(),
            "Upstream response received"
        );

        Ok(body.to_vec())
    }

    fn classify_send_error(&self, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::QueryTimeout
        } else if e.is_connect() {
            DomainError::TransportConnectionRefused {
                server: self.base_url.to_string(),
                reason: error_chain(&e),
            }
        } else {
            DomainError::UpstreamRequest(format!(
                "Request to {} failed: {}",
                self.base_url,
                error_chain(&e)
            ))
        }
    }
}

#[async_trait]
impl UpstreamResolver for JsonDohResolver {
    async fn resolve(&self, lookup: &DnsLookup) -> Result<Resolution, DomainError> {
        let url = build_query_url(&self.base_url, lookup);
        info!(url = %url, "Requesting upstream");

        let body = self.fetch(url).await?;
        parse_resolution(&body)
    }

    fn upstream_name(&self) -> &str {
        self.base_url.as_str()
    }
}

/// `reqwest::Error` hides the underlying io/dns error behind `source()`.
fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Append `name` and `type` to the resolver base URL.
///
/// Values are form-encoded and otherwise untouched; any query string already
/// on the base URL is kept in front of them.
pub fn build_query_url(base: &Url, lookup: &DnsLookup) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("name", &lookup.domain)
        .append_pair("type", &lookup.query_type);
    url
}

pub fn parse_resolution(body: &[u8]) -> Result<Resolution, DomainError> {
    serde_json::from_slice(body).map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))
}
