//! Notebook format detection.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// nbformat version information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotebookFormat {
    /// Major version (e.g. 4)
    pub major: u64,
    /// Minor version (e.g. 5); 0 when the file does not record one
    pub minor: u64,
}

impl NotebookFormat {
    /// Check if this crate can read the format.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_MAJOR.contains(&self.major)
    }
}

impl std::fmt::Display for NotebookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nbformat {}.{}", self.major, self.minor)
    }
}

/// Major versions that can be read (3 is upgraded to 4).
const SUPPORTED_MAJOR: [u64; 2] = [3, 4];

/// Detect the notebook format of a file.
///
/// # Example
/// ```no_run
/// use nbreport::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("analysis.ipynb").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<NotebookFormat> {
    let data = fs::read(path)?;
    detect_format_from_bytes(&data)
}

/// Detect the notebook format from raw file content.
///
/// # Returns
/// * `Ok(NotebookFormat)` if the data is a JSON object with an integer `nbformat`
/// * `Err(Error::NotNotebook)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<NotebookFormat> {
    let value: Value =
        serde_json::from_slice(data).map_err(|e| Error::NotNotebook(e.to_string()))?;
    detect_format(&value)
}

/// Detect the notebook format from an already parsed JSON value.
pub fn detect_format(value: &Value) -> Result<NotebookFormat> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::NotNotebook("top-level value is not an object".into()))?;

    let major = object
        .get("nbformat")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::NotNotebook("missing integer \"nbformat\" field".into()))?;
    let minor = object
        .get("nbformat_minor")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    Ok(NotebookFormat { major, minor })
}

/// Check if a file is a readable notebook.
pub fn is_notebook<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path)
        .map(|format| format.is_supported())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_v4() {
        let data = br#"{"cells": [], "metadata": {}, "nbformat": 4, "nbformat_minor": 5}"#;
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(format, NotebookFormat { major: 4, minor: 5 });
        assert!(format.is_supported());
        assert_eq!(format.to_string(), "nbformat 4.5");
    }

    #[test]
    fn test_detect_missing_minor() {
        let data = br#"{"nbformat": 3, "worksheets": []}"#;
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(format.minor, 0);
        assert!(format.is_supported());
    }

    #[test]
    fn test_detect_not_json() {
        let result = detect_format_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::NotNotebook(_))));
    }

    #[test]
    fn test_detect_no_version() {
        let result = detect_format_from_bytes(br#"{"cells": []}"#);
        assert!(matches!(result, Err(Error::NotNotebook(_))));

        let result = detect_format_from_bytes(b"[1, 2, 3]");
        assert!(matches!(result, Err(Error::NotNotebook(_))));
    }

    #[test]
    fn test_unsupported_major() {
        let format = NotebookFormat { major: 2, minor: 0 };
        assert!(!format.is_supported());
    }
}
