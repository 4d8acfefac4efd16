//! Error taxonomy for a pipeline run.

use std::path::PathBuf;

/// Errors raised by the pipeline and its adapters.
///
/// `DatabaseDownload` and `DatabaseOpen` are fatal to a run. `Resolve` and
/// `Fetch` are contained by the service and turn into an empty source.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("failed to download GeoIP database from {url}: {reason}")]
    DatabaseDownload { url: String, reason: String },

    #[error("failed to open GeoIP database at {}: {reason}", path.display())]
    DatabaseOpen { path: PathBuf, reason: String },

    #[error("failed to resolve {domain}: {reason}")]
    Resolve { domain: String, reason: String },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}
