//! Reqwest HTTP Fetcher
//!
//! Implements HttpFetcher over a shared reqwest client.

use crate::domain::errors::EnrichError;
use crate::domain::ports::HttpFetcher;
use async_trait::async_trait;

/// HTTP fetcher backed by reqwest.
#[derive(Clone, Default)]
pub struct ReqwestHttpFetcher {
    client: reqwest::Client,
}

impl ReqwestHttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, EnrichError> {
        let fetch_err = |reason: String| EnrichError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(fetch_err(format!("status {}", status)));
        }

        Ok(response)
    }
}

#[async_trait]
impl HttpFetcher for ReqwestHttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, EnrichError> {
        let response = self.get(url).await?;
        response.text().await.map_err(|e| EnrichError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, EnrichError> {
        let response = self.get(url).await?;
        let bytes = response.bytes().await.map_err(|e| EnrichError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}
