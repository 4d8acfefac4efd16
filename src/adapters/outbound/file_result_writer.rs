//! File Result Writer
//!
//! Implements ResultWriter by overwriting a UTF-8 text file.

use crate::domain::entities::ResultLine;
use crate::domain::errors::EnrichError;
use crate::domain::ports::ResultWriter;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Writes result lines to a file, replacing previous content.
#[derive(Debug, Clone)]
pub struct FileResultWriter {
    path: PathBuf,
}

impl FileResultWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultWriter for FileResultWriter {
    async fn write_all(&self, lines: &[ResultLine]) -> Result<(), EnrichError> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(&line.to_string());
            contents.push('\n');
        }

        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| EnrichError::Write {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!("wrote {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }
}
