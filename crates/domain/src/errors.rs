use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport connection refused by {server}: {reason}")]
    TransportConnectionRefused { server: String, reason: String },

    #[error("Upstream request failed: {0}")]
    UpstreamRequest(String),

    #[error("Unreadable upstream response: {0}")]
    UnreadableResponse(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Invalid upstream URL: {0}")]
    InvalidUpstreamUrl(String),
}
