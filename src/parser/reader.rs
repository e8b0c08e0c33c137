//! Notebook reader for nbformat JSON files.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::detect::{detect_format, NotebookFormat};
use crate::error::{Error, Result};
use crate::model::Notebook;

use super::upgrade::upgrade_v3;

/// Notebook reader.
///
/// Detects the nbformat version on construction and converts the
/// document to nbformat 4 on [`parse`](NotebookReader::parse).
pub struct NotebookReader {
    value: Value,
    format: NotebookFormat,
}

impl NotebookReader {
    /// Open a notebook file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading notebook {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Read a notebook from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(data).map_err(|e| Error::NotNotebook(e.to_string()))?;
        Self::from_value(value)
    }

    /// Read a notebook from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Read a notebook from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let format = detect_format(&value)?;
        if !format.is_supported() {
            return Err(Error::UnsupportedVersion(format.major));
        }
        Ok(Self { value, format })
    }

    /// Get the format detected in the source.
    pub fn format(&self) -> NotebookFormat {
        self.format
    }

    /// Parse the document into an nbformat 4 notebook.
    pub fn parse(self) -> Result<Notebook> {
        let value = match self.format.major {
            4 => self.value,
            3 => {
                log::debug!("Upgrading {} notebook to nbformat 4", self.format);
                upgrade_v3(self.value)?
            }
            major => return Err(Error::UnsupportedVersion(major)),
        };

        let notebook: Notebook =
            serde_json::from_value(value).map_err(|e| Error::NotebookParse(e.to_string()))?;
        log::debug!("Parsed notebook with {} cells", notebook.cell_count());
        Ok(notebook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellType;

    const V4: &str = r##"{
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": ["# Intro\n", "text"]},
            {"cell_type": "code", "execution_count": 1, "metadata": {},
             "outputs": [], "source": "x = 1"}
        ],
        "metadata": {"kernelspec": {"name": "python3"}},
        "nbformat": 4,
        "nbformat_minor": 2
    }"##;

    #[test]
    fn test_parse_v4() {
        let reader = NotebookReader::from_bytes(V4.as_bytes()).unwrap();
        assert_eq!(reader.format().minor, 2);

        let nb = reader.parse().unwrap();
        assert_eq!(nb.cell_count(), 2);
        assert_eq!(nb.cells[0].cell_type(), CellType::Markdown);
        assert_eq!(nb.cells[0].source().as_str(), "# Intro\ntext");
        assert_eq!(nb.nbformat_minor, 2);
        assert!(nb.metadata.contains_key("kernelspec"));
    }

    #[test]
    fn test_from_reader() {
        let nb = NotebookReader::from_reader(V4.as_bytes())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(nb.cell_count(), 2);
    }

    #[test]
    fn test_unsupported_version() {
        let data = br#"{"nbformat": 5, "nbformat_minor": 0, "cells": []}"#;
        let result = NotebookReader::from_bytes(data);
        assert!(matches!(result, Err(Error::UnsupportedVersion(5))));
    }

    #[test]
    fn test_not_json() {
        let result = NotebookReader::from_bytes(b"not json");
        assert!(matches!(result, Err(Error::NotNotebook(_))));
    }

    #[test]
    fn test_bad_structure() {
        let data = br#"{"nbformat": 4, "nbformat_minor": 5, "cells": {"oops": 1}}"#;
        let result = NotebookReader::from_bytes(data).unwrap().parse();
        assert!(matches!(result, Err(Error::NotebookParse(_))));
    }
}
