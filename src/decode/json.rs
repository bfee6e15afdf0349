//! JSON decoder

use super::records::Records;
use crate::error::{Error, Result};
use serde_json::Value;

/// Default record path: all elements of a top-level array
const DEFAULT_RECORDS_PATH: &str = "$[*]";

/// JSON decoder with JSONPath record extraction
///
/// Stateless: decoding the same body twice yields structurally equal
/// sequences. Malformed JSON is a hard error — a body that cannot be parsed
/// cannot be trusted to signal "empty" correctly. A well-formed body whose
/// record path matches nothing decodes to an empty sequence, which is the
/// normal pagination termination signal.
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    /// JSONPath to the records within the response
    records_path: String,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self {
            records_path: DEFAULT_RECORDS_PATH.to_string(),
        }
    }
}

impl JsonDecoder {
    /// Create a decoder over a top-level array (`$[*]`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a custom record path, e.g. `$.data[*]`
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            records_path: path.into(),
        }
    }

    /// The configured record path
    pub fn records_path(&self) -> &str {
        &self.records_path
    }

    /// Decode a response body into a single-pass record sequence
    pub fn decode(&self, body: &str) -> Result<Records> {
        let value: Value = serde_json::from_str(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse JSON: {e}"),
        })?;
        Ok(Records::new(self.extract_records(&value)?))
    }

    /// Extract records from a parsed value using the configured path
    fn extract_records(&self, value: &Value) -> Result<Vec<Value>> {
        if self.records_path.contains('*') {
            extract_with_jsonpath(value, &self.records_path)
        } else {
            // Simple dot-notation path
            match extract_simple_path(value, &self.records_path) {
                Some(Value::Array(arr)) => Ok(arr),
                Some(v) => Ok(vec![v]),
                None => Ok(vec![]),
            }
        }
    }
}

/// Extract a value using simple dot-notation path
fn extract_simple_path(value: &Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    let parts: Vec<&str> = path.split('.').collect();

    let mut current = value;
    for part in parts {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    Some(current.clone())
}

/// Extract records using jsonpath-rust
fn extract_with_jsonpath(value: &Value, path: &str) -> Result<Vec<Value>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path)
        .map_err(|e| Error::json_path(format!("Invalid JSONPath: {e}")))?;

    match jp.find(value) {
        Value::Array(arr) => Ok(arr),
        Value::Null => Ok(vec![]),
        other => Ok(vec![other]),
    }
}
