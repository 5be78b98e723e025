use doh_proxy_api::AppState;
use doh_proxy_application::use_cases::ResolveDomainUseCase;
use doh_proxy_domain::Config;
use doh_proxy_infrastructure::dns::JsonDohResolver;
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}

impl Services {
    /// Build the single shared upstream client and everything that hangs off it.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = Arc::new(JsonDohResolver::from_config(&config.upstream)?);

        info!(
            upstream = %resolver.base_url(),
            timeout_secs = config.upstream.timeout_secs,
            "Upstream resolver initialized"
        );

        let resolve_domain = Arc::new(ResolveDomainUseCase::new(resolver));

        Ok(Self { resolve_domain })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            resolve_domain: self.resolve_domain.clone(),
        }
    }
}
