//! GeoIP database provisioning
//!
//! Makes sure the country database exists locally before a run opens it.

use crate::domain::errors::EnrichError;
use crate::domain::ports::HttpFetcher;
use std::path::Path;

/// Ensure the GeoIP database exists at `path`, downloading it if absent.
///
/// An existing file is reused as-is. Downloads go to a temporary sibling
/// and are renamed into place, so a failed write never leaves a partial
/// database behind. Any failure here is fatal to the run.
pub async fn ensure_database(
    fetcher: &dyn HttpFetcher,
    path: &Path,
    url: &str,
) -> Result<(), EnrichError> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        tracing::debug!("GeoIP DB present at {}", path.display());
        return Ok(());
    }

    tracing::info!("GeoIP DB missing at {}, downloading from {}", path.display(), url);

    let download_err = |reason: String| EnrichError::DatabaseDownload {
        url: url.to_string(),
        reason,
    };

    let bytes = fetcher
        .fetch_bytes(url)
        .await
        .map_err(|e| download_err(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| download_err(format!("create {}: {}", parent.display(), e)))?;
    }

    let tmp_path = path.with_extension("download");
    tokio::fs::write(&tmp_path, &bytes)
        .await
        .map_err(|e| download_err(format!("write {}: {}", tmp_path.display(), e)))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| download_err(format!("rename {}: {}", tmp_path.display(), e)))?;

    tracing::info!("GeoIP DB updated ({} bytes)", bytes.len());
    Ok(())
}
