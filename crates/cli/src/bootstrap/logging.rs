use doh_proxy_domain::Config;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level is used, with
/// the HTTP client internals held at `warn` unless named explicitly.
pub fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = config.logging.level.clone();

        for noisy in ["hyper", "hyper_util", "reqwest", "rustls", "h2"] {
            if !filter.contains(noisy) {
                filter.push_str(&format!(",{}=warn", noisy));
            }
        }

        EnvFilter::new(filter)
    });

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
