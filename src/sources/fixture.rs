use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use super::IssueSource;
use crate::model::issue::ExternalIssueRecord;
use crate::normalize::records_from_json;

/// Offline stand-in for a GitHub issues poll.
pub struct FixtureSource;

#[async_trait]
impl IssueSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch_issues(&self) -> Result<Vec<ExternalIssueRecord>> {
        let issues = json!([
            {
                "title": "Support open innovation showcase",
                "html_url": "https://github.com/example/repo/issues/1",
                "body": "Collect community prompts and route them through InnoAgent-Hub.",
            }
        ]);
        Ok(records_from_json(&issues)?)
    }
}
