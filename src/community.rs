use anyhow::{Context, Result};
use std::io::Write;

use crate::model::idea::Idea;
use crate::normalize::normalize;
use crate::sources::IssueSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Poll every source in order and normalize what they return.
pub async fn collect_ideas(sources: &[Box<dyn IssueSource>]) -> Result<Vec<Idea>> {
    let mut ideas = Vec::new();
    for source in sources {
        let records = source
            .fetch_issues()
            .await
            .with_context(|| format!("Issue source {} failed", source.name()))?;
        tracing::info!(source = source.name(), count = records.len(), "fetched issues");
        ideas.extend(normalize(records));
    }
    Ok(ideas)
}

pub fn render(ideas: &[Idea], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for idea in ideas {
                writeln!(out, "[COMMUNITY IDEA] {} -> {}", idea.title, idea.url)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, ideas)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub async fn run_community(
    sources: &[Box<dyn IssueSource>],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let ideas = collect_ideas(sources).await?;
    render(&ideas, format, out)
}
