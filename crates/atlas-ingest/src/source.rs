//! Raw record parsing and local file sources.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Raw records obtained from a source, plus the failure that emptied them.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub records: Vec<Value>,
    pub failure: Option<IngestError>,
}

impl FetchOutcome {
    #[must_use]
    pub fn success(records: Vec<Value>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// An empty record sequence standing in for a failed source.
    #[must_use]
    pub fn failed(error: IngestError) -> Self {
        warn!(%error, "country source unavailable, continuing with no records");
        Self {
            records: Vec::new(),
            failure: Some(error),
        }
    }

    #[must_use]
    pub fn from_result(result: Result<Vec<Value>>) -> Self {
        match result {
            Ok(records) => Self::success(records),
            Err(error) => Self::failed(error),
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Parse a response body into raw country records.
///
/// The body must be a JSON array; its elements are kept as-is, whatever
/// their shape.
pub fn parse_records(body: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(records) => {
            debug!(records = records.len(), "parsed country records");
            Ok(records)
        }
        other => Err(IngestError::UnexpectedShape(json_kind(&other))),
    }
}

/// Read raw country records from a JSON file.
pub fn load_records_file(path: &Path) -> Result<Vec<Value>> {
    debug!(path = %path.display(), "reading country records");
    let body = std::fs::read_to_string(path)?;
    parse_records(&body)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_any_elements() {
        let records = parse_records(r#"[{"name":{"common":"A"}}, {}, 3]"#).expect("parse");
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn rejects_non_array_bodies() {
        let err = parse_records(r#"{"status":404,"message":"Not Found"}"#).unwrap_err();
        assert!(matches!(err, IngestError::UnexpectedShape("object")));
        let err = parse_records("not json").unwrap_err();
        assert!(matches!(err, IngestError::JsonParse(_)));
    }

    #[test]
    fn failed_outcome_has_no_records() {
        let outcome = FetchOutcome::from_result(Err(IngestError::Status { status: 500 }));
        assert!(outcome.records.is_empty());
        assert!(outcome.is_failure());
        let outcome = FetchOutcome::from_result(Ok(vec![Value::Null]));
        assert_eq!(outcome.records.len(), 1);
        assert!(!outcome.is_failure());
    }
}
