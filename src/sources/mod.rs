pub mod file;
pub mod fixture;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::config::AppConfig;
use crate::model::issue::ExternalIssueRecord;

/// Somewhere raw issue records come from.
#[async_trait]
pub trait IssueSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch_issues(&self) -> Result<Vec<ExternalIssueRecord>>;
}


/// Build the sources to poll. An explicit issues file wins over the
/// configured ones; with nothing configured the built-in fixture is used.
///
/// Relative `issue_files` entries resolve against `project_root`; the
/// explicit file resolves against the current directory.
pub fn create_sources(
    config: &AppConfig,
    issues_file: Option<&Path>,
    project_root: &Path,
) -> Vec<Box<dyn IssueSource>> {
    let mut sources: Vec<Box<dyn IssueSource>> = Vec::new();

    if let Some(path) = issues_file {
        sources.push(Box::new(file::FileSource::new(path.to_path_buf())));
        return sources;
    }

    for path in &config.community.issue_files {
        // join() keeps absolute paths as they are
        sources.push(Box::new(file::FileSource::new(project_root.join(path))));
    }

    if sources.is_empty() {
        sources.push(Box::new(fixture::FixtureSource));
    }

    sources
}
