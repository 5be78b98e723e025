#![allow(dead_code)]

use async_trait::async_trait;
use doh_proxy_application::ports::UpstreamResolver;
use doh_proxy_domain::{Answer, DnsLookup, DomainError, Question, Resolution};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockUpstreamResolver {
    responses: Arc<RwLock<HashMap<String, Resolution>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    seen: Arc<RwLock<Vec<DnsLookup>>>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, resolution: Resolution) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), resolution);
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.errors
            .write()
            .unwrap()
            .insert(domain.to_string(), error);
    }

    pub fn seen(&self) -> Vec<DnsLookup> {
        self.seen.read().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn resolve(&self, lookup: &DnsLookup) -> Result<Resolution, DomainError> {
        self.seen.write().unwrap().push(lookup.clone());

        if let Some(err) = self.errors.read().unwrap().get(&*lookup.domain) {
            return Err(err.clone());
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&*lookup.domain)
            .cloned()
            .unwrap_or_default())
    }

    fn upstream_name(&self) -> &str {
        "mock"
    }
}

pub fn single_answer(name: &str, record_type: u16, ttl: u32, data: &str) -> Resolution {
    Resolution::new(
        vec![Question {
            name: name.to_string(),
            record_type,
        }],
        vec![Answer {
            name: name.to_string(),
            record_type,
            ttl,
            data: data.to_string(),
        }],
    )
}
