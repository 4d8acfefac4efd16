//! Host Resolver Port
//!
//! Defines the interface for resolving a domain name to addresses.

use crate::domain::errors::EnrichError;
use async_trait::async_trait;
use std::net::IpAddr;

/// Resolver for domain name to IP addresses.
///
/// Implementations return every address the resolver reports,
/// duplicates included; the caller deduplicates.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, EnrichError>;
}
