//! nbformat multiline strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text stored either as one string or as a list of lines.
///
/// nbformat allows both shapes for cell sources, stream text and textual
/// MIME data. The joined text is kept; serialization always writes the
/// list form with line endings preserved, as Jupyter itself does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MultilineString(String);

impl MultilineString {
    /// Create from already-joined text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The joined text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into lines, keeping the trailing `\n` on each line.
    pub fn lines(&self) -> Vec<&str> {
        self.0.split_inclusive('\n').collect()
    }

    /// Consume and return the joined text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MultilineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MultilineString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MultilineString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<Vec<String>> for MultilineString {
    fn from(lines: Vec<String>) -> Self {
        Self(lines.concat())
    }
}

impl Serialize for MultilineString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.lines())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMultiline {
    Single(String),
    Lines(Vec<String>),
}

impl<'de> Deserialize<'de> for MultilineString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawMultiline::deserialize(deserializer)? {
            RawMultiline::Single(s) => Self(s),
            RawMultiline::Lines(lines) => lines.into(),
        })
    }
}
