//! Code cell outputs.

use super::{Metadata, MultilineString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// MIME type to data mapping of a rich output or attachment.
pub type MimeBundle = BTreeMap<String, Value>;

/// A single output of a code cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    /// Text written to stdout or stderr.
    Stream { name: String, text: MultilineString },

    /// Rich data published by `display()`.
    DisplayData {
        data: MimeBundle,
        #[serde(default)]
        metadata: Metadata,
    },

    /// The value of the last expression in a cell.
    ExecuteResult {
        #[serde(default)]
        execution_count: Option<i64>,
        data: MimeBundle,
        #[serde(default)]
        metadata: Metadata,
    },

    /// An exception raised during execution.
    Error {
        ename: String,
        evalue: String,
        #[serde(default)]
        traceback: Vec<String>,
    },
}

impl Output {
    /// Get the MIME bundle of a rich output.
    pub fn data(&self) -> Option<&MimeBundle> {
        match self {
            Output::DisplayData { data, .. } | Output::ExecuteResult { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Get the output metadata of a rich output.
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Output::DisplayData { metadata, .. } | Output::ExecuteResult { metadata, .. } => {
                Some(metadata)
            }
            _ => None,
        }
    }
}

/// Read a MIME bundle value as text.
///
/// Textual MIME data may be a string or a list of strings. JSON objects
/// (e.g. `application/json`) are serialized back to a string.
pub fn mime_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str())
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.concat()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
