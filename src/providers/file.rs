use crate::core::RatesSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Reads a previously downloaded `daily.txt` from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

#[async_trait]
impl RatesSource for FileSource {
    async fn fetch_text(&self) -> Result<String> {
        debug!("Reading rates feed from {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read rates file: {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
