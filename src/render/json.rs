//! JSON serialization of notebooks.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::model::Notebook;

/// Layout of serialized notebook JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// nbformat on-disk layout: one-space indent and a final newline
    #[default]
    Pretty,
    /// Single line, for hashing and comparisons
    Compact,
}

/// Indent nbformat uses when writing `.ipynb` files.
const NBFORMAT_INDENT: &[u8] = b" ";

/// Serialize a notebook as nbformat 4 JSON.
///
/// `Pretty` output is laid out the way Jupyter saves notebooks, so a merged
/// notebook can be written next to its inputs and diffed against them.
pub fn to_json(notebook: &Notebook, format: JsonFormat) -> Result<String> {
    let mut buf = Vec::new();
    match format {
        JsonFormat::Pretty => {
            let formatter = PrettyFormatter::with_indent(NBFORMAT_INDENT);
            let mut serializer = Serializer::with_formatter(&mut buf, formatter);
            notebook.serialize(&mut serializer).map_err(json_error)?;
            buf.push(b'\n');
        }
        JsonFormat::Compact => serde_json::to_writer(&mut buf, notebook).map_err(json_error)?,
    }

    String::from_utf8(buf).map_err(|e| Error::Render(format!("notebook JSON is not UTF-8: {}", e)))
}

fn json_error(e: serde_json::Error) -> Error {
    Error::Render(format!("notebook JSON serialization failed: {}", e))
}
