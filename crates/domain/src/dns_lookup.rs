use std::fmt;
use std::sync::Arc;

/// A single inbound lookup: the domain and record-type mnemonic exactly as
/// they arrived on the request path.
///
/// Neither field is validated. The upstream resolver is the authority on
/// whether `example..com` or `BOGUS` make sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsLookup {
    pub domain: Arc<str>,
    pub query_type: Arc<str>,
}

impl DnsLookup {
    pub fn new(domain: impl Into<Arc<str>>, query_type: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
            query_type: query_type.into(),
        }
    }
}

impl fmt::Display for DnsLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain, self.query_type)
    }
}
