use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use super::IssueSource;
use crate::model::issue::ExternalIssueRecord;
use crate::normalize::records_from_json;

/// Reads a saved issue-tracker response: a JSON array of issue objects.
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

#[async_trait]
impl IssueSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_issues(&self) -> Result<Vec<ExternalIssueRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read issues from {}", self.path.display()))?;

        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        let records = records_from_json(&value)
            .with_context(|| format!("Unexpected issue data in {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded issues");
        Ok(records)
    }
}
