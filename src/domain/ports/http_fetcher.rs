//! HTTP Fetcher Port
//!
//! Defines the interface for downloading remote documents.

use crate::domain::errors::EnrichError;
use async_trait::async_trait;

/// Fetcher for remote resources over HTTP.
///
/// Non-success responses are reported as `EnrichError::Fetch`.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Fetch a plaintext document.
    async fn fetch_text(&self, url: &str) -> Result<String, EnrichError>;

    /// Fetch a binary resource.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, EnrichError>;
}
