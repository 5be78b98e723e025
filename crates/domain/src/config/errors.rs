#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bind address {0}: {1}")]
    BindAddress(String, String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
