//! Result Writer Port
//!
//! Defines where the annotated lines of a run end up.

use crate::domain::entities::ResultLine;
use crate::domain::errors::EnrichError;
use async_trait::async_trait;

/// Sink for the annotated lines of a run.
#[async_trait]
pub trait ResultWriter: Send + Sync {
    /// Replace any previous output with `lines`, one per line.
    async fn write_all(&self, lines: &[ResultLine]) -> Result<(), EnrichError>;
}
