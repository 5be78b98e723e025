mod upstream_resolver;

pub use upstream_resolver::UpstreamResolver;

// Re-export for convenience
pub use doh_proxy_domain::{DnsLookup, Resolution};
