//! System Host Resolver
//!
//! Implements HostResolver with the operating system resolver
//! (getaddrinfo via tokio).

use crate::domain::errors::EnrichError;
use crate::domain::ports::HostResolver;
use async_trait::async_trait;
use std::net::IpAddr;

/// Resolves domains through the system resolver.
///
/// Returns both A and AAAA results, in the order the system reports them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, EnrichError> {
        // Port 0 is only a placeholder for the lookup.
        let addrs = tokio::net::lookup_host((domain, 0))
            .await
            .map_err(|e| EnrichError::Resolve {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;

        Ok(addrs.map(|sa| sa.ip()).collect())
    }
}
