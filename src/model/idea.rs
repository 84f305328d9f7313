use serde::{Deserialize, Serialize};

use super::issue::ExternalIssueRecord;

pub const DEFAULT_TITLE: &str = "Untitled";

/// Maximum summary length, counted in chars. Longer bodies are cut without
/// any marker.
pub const SUMMARY_MAX_CHARS: usize = 280;

/// A community-sourced idea, normalized from an issue tracker record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub url: String,
    pub summary: String,
}

impl From<ExternalIssueRecord> for Idea {
    fn from(record: ExternalIssueRecord) -> Self {
        let body = record.body.into_or("");
        Self {
            title: record.title.into_or(DEFAULT_TITLE),
            url: record.html_url.into_or(""),
            summary: truncate_chars(trim_text(&body), SUMMARY_MAX_CHARS),
        }
    }
}

/// Strips Unicode whitespace and the ASCII separators U+001C to U+001F.
fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}
