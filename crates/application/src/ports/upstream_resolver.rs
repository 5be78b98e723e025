use async_trait::async_trait;
use doh_proxy_domain::{DnsLookup, DomainError, Resolution};

/// Something that can answer a lookup by asking an upstream resolver.
///
/// Implementations must be safe to share between concurrent requests; the
/// server holds a single instance behind an `Arc` for its whole lifetime.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn resolve(&self, lookup: &DnsLookup) -> Result<Resolution, DomainError>;

    /// Human-readable upstream identifier, used in log fields.
    fn upstream_name(&self) -> &str;
}
