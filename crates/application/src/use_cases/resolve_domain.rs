use crate::ports::UpstreamResolver;
use doh_proxy_domain::{DnsLookup, DomainError, Resolution};
use std::sync::Arc;
use tracing::{debug, error};

pub struct ResolveDomainUseCase {
    resolver: Arc<dyn UpstreamResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn UpstreamResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve `domain` for `query_type` through the upstream resolver.
    ///
    /// Both inputs go upstream untouched. Any failure is logged here with its
    /// cause and returned as-is; there is no retry and no fallback.
    pub async fn execute(&self, domain: &str, query_type: &str) -> Result<Resolution, DomainError> {
        let lookup = DnsLookup::new(domain, query_type);

        match self.resolver.resolve(&lookup).await {
            Ok(resolution) => {
                debug!(
                    lookup = %lookup,
                    questions = resolution.questions.len(),
                    answers = resolution.answers.len(),
                    "Upstream resolution succeeded"
                );
                Ok(resolution)
            }
            Err(e) => {
                error!(
                    error = %e,
                    lookup = %lookup,
                    upstream = self.resolver.upstream_name(),
                    "Upstream resolution failed"
                );
                Err(e)
            }
        }
    }
}
