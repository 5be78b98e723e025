use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for doh-proxy
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, port)
    pub server: ServerConfig,

    /// Upstream DoH resolver
    pub upstream: UpstreamConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Build the configuration from built-in defaults plus command-line overrides.
    ///
    /// There is no configuration file: every knob either keeps its default or
    /// is set on the command line.
    pub fn load(cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(url) = overrides.upstream_url {
            self.upstream.url = url;
        }
        if let Some(timeout) = overrides.upstream_timeout_secs {
            self.upstream.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.upstream.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No upstream resolver URL configured".to_string(),
            ));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.bind_address, self.server.port);
        addr.parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::BindAddress(addr, e.to_string()))
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub upstream_url: Option<String>,
    pub upstream_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}
