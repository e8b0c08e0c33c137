//! Notebook cells.

use super::{Metadata, MimeBundle, MultilineString, Output};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Files attached to a markdown or raw cell, keyed by attachment name.
pub type Attachments = BTreeMap<String, MimeBundle>;

/// Kind of a cell, without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Markdown prose
    Markdown,
    /// Executable code with outputs
    Code,
    /// Raw content passed through to the output format
    Raw,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Markdown => "markdown",
            CellType::Code => "code",
            CellType::Raw => "raw",
        };
        f.write_str(name)
    }
}

/// A single notebook cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Markdown cell.
    Markdown {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        metadata: Metadata,
        source: MultilineString,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attachments: Option<Attachments>,
    },

    /// Code cell.
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        metadata: Metadata,
        source: MultilineString,
        #[serde(default)]
        execution_count: Option<i64>,
        #[serde(default)]
        outputs: Vec<Output>,
    },

    /// Raw cell.
    Raw {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        metadata: Metadata,
        source: MultilineString,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attachments: Option<Attachments>,
    },
}

impl Cell {
    /// Create a markdown cell with empty metadata.
    pub fn markdown(text: impl Into<String>) -> Self {
        Cell::Markdown {
            id: None,
            metadata: Metadata::new(),
            source: MultilineString::new(text),
            attachments: None,
        }
    }

    /// Create a code cell without outputs.
    pub fn code(text: impl Into<String>) -> Self {
        Cell::Code {
            id: None,
            metadata: Metadata::new(),
            source: MultilineString::new(text),
            execution_count: None,
            outputs: Vec::new(),
        }
    }

    /// Create a raw cell with empty metadata.
    pub fn raw(text: impl Into<String>) -> Self {
        Cell::Raw {
            id: None,
            metadata: Metadata::new(),
            source: MultilineString::new(text),
            attachments: None,
        }
    }

    /// Get the kind of this cell.
    pub fn cell_type(&self) -> CellType {
        match self {
            Cell::Markdown { .. } => CellType::Markdown,
            Cell::Code { .. } => CellType::Code,
            Cell::Raw { .. } => CellType::Raw,
        }
    }

    /// Get the cell source.
    pub fn source(&self) -> &MultilineString {
        match self {
            Cell::Markdown { source, .. } | Cell::Code { source, .. } | Cell::Raw { source, .. } => {
                source
            }
        }
    }

    /// Get the cell metadata.
    pub fn metadata(&self) -> &Metadata {
        match self {
            Cell::Markdown { metadata, .. }
            | Cell::Code { metadata, .. }
            | Cell::Raw { metadata, .. } => metadata,
        }
    }

    /// Get the cell attachments, if any.
    pub fn attachments(&self) -> Option<&Attachments> {
        match self {
            Cell::Markdown { attachments, .. } | Cell::Raw { attachments, .. } => {
                attachments.as_ref()
            }
            Cell::Code { .. } => None,
        }
    }

    /// Get the outputs of a code cell (empty for other kinds).
    pub fn outputs(&self) -> &[Output] {
        match self {
            Cell::Code { outputs, .. } => outputs,
            _ => &[],
        }
    }

    /// Check if this is a markdown cell.
    pub fn is_markdown(&self) -> bool {
        matches!(self, Cell::Markdown { .. })
    }

    /// Check if this is a code cell.
    pub fn is_code(&self) -> bool {
        matches!(self, Cell::Code { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_constructor() {
        let cell = Cell::markdown("# Hello");
        assert!(cell.is_markdown());
        assert_eq!(cell.source().as_str(), "# Hello");
        assert!(cell.metadata().is_empty());
        assert!(cell.outputs().is_empty());
    }

    #[test]
    fn test_deserialize_code_cell() {
        let json = r#"{
            "cell_type": "code",
            "execution_count": 3,
            "metadata": {"tags": ["x"]},
            "outputs": [{"output_type": "stream", "name": "stdout", "text": ["hi\n"]}],
            "source": ["print('hi')"]
        }"#;
        let cell: Cell = serde_json::from_str(json).unwrap();
        assert_eq!(cell.cell_type(), CellType::Code);
        assert_eq!(cell.outputs().len(), 1);
        assert_eq!(cell.source().as_str(), "print('hi')");
        if let Cell::Code {
            execution_count, ..
        } = cell
        {
            assert_eq!(execution_count, Some(3));
        }
    }

    #[test]
    fn test_unknown_cell_type_rejected() {
        let json = r#"{"cell_type": "heading", "metadata": {}, "source": "x"}"#;
        assert!(serde_json::from_str::<Cell>(json).is_err());
    }

    #[test]
    fn test_serialize_omits_absent_optionals() {
        let json = serde_json::to_value(Cell::markdown("x")).unwrap();
        assert_eq!(json["cell_type"], "markdown");
        assert!(json.get("id").is_none());
        assert!(json.get("attachments").is_none());
    }
}
