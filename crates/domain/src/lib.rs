//! doh-proxy Domain Layer
pub mod config;
pub mod dns_lookup;
pub mod errors;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_lookup::DnsLookup;
pub use errors::DomainError;
pub use resolution::{Answer, Question, Resolution};
