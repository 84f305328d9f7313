use serde_json::Value;
use thiserror::Error;

use crate::model::idea::Idea;
use crate::model::issue::ExternalIssueRecord;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The document is not an array of objects. `index` is set when a
    /// single element is at fault, and unset when the whole document is.
    #[error("malformed input: {}", describe(*index, found))]
    MalformedInput {
        index: Option<usize>,
        found: &'static str,
    },
}

fn describe(index: Option<usize>, found: &str) -> String {
    match index {
        Some(i) => format!("issue #{i} is {found}, expected an object"),
        None => format!("expected an array of issues, found {found}"),
    }
}

/// Map raw issue records to ideas, one-to-one and in input order.
pub fn normalize(records: impl IntoIterator<Item = ExternalIssueRecord>) -> Vec<Idea> {
    records.into_iter().map(Idea::from).collect()
}

/// Convert an untyped JSON document into issue records.
///
/// The document must be an array of objects. Anything else is rejected
/// rather than skipped, so callers never get fewer records than they sent.
pub fn records_from_json(value: &Value) -> Result<Vec<ExternalIssueRecord>, NormalizeError> {
    let items = value.as_array().ok_or(NormalizeError::MalformedInput {
        index: None,
        found: json_kind(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object()
                .map(ExternalIssueRecord::from_map)
                .ok_or(NormalizeError::MalformedInput {
                    index: Some(index),
                    found: json_kind(item),
                })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
