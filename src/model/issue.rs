use serde_json::{Map, Value};

/// State of one expected key on a raw issue record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Missing,
    Null,
    Value(String),
}

impl Field {
    fn from_entry(value: Option<&Value>) -> Self {
        match value {
            None => Field::Missing,
            Some(Value::Null) => Field::Null,
            Some(Value::String(s)) => Field::Value(s.clone()),
            // Numbers, booleans and nested values keep their JSON text
            Some(other) => Field::Value(other.to_string()),
        }
    }

    pub fn into_or(self, default: &str) -> String {
        match self {
            Field::Value(s) => s,
            Field::Missing | Field::Null => default.to_string(),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Value(s.to_string())
    }
}

/// A raw issue as handed over by an issue tracker, e.g. one element of the
/// GitHub `/issues` response. Only the keys the normalizer reads are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExternalIssueRecord {
    pub title: Field,
    pub html_url: Field,
    pub body: Field,
}

impl ExternalIssueRecord {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            title: Field::from_entry(map.get("title")),
            html_url: Field::from_entry(map.get("html_url")),
            body: Field::from_entry(map.get("body")),
        }
    }
}
