//! In-memory upgrade of nbformat 3 documents to nbformat 4.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{NBFORMAT, NBFORMAT_MINOR};

/// Legacy output keys and the MIME types that replace them.
const V3_MIME_KEYS: [(&str, &str); 9] = [
    ("text", "text/plain"),
    ("html", "text/html"),
    ("markdown", "text/markdown"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("jpeg", "image/jpeg"),
    ("latex", "text/latex"),
    ("json", "application/json"),
    ("javascript", "application/javascript"),
];

/// Upgrade an nbformat 3 notebook value to nbformat 4.
///
/// Cells from every worksheet are concatenated in order. `heading` cells
/// become markdown headings, and legacy output types and keys are renamed.
pub fn upgrade_v3(value: Value) -> Result<Value> {
    let Value::Object(mut nb) = value else {
        return Err(Error::NotebookParse("notebook is not an object".into()));
    };

    let mut cells = Vec::new();
    if let Some(worksheets) = nb.remove("worksheets") {
        let Value::Array(worksheets) = worksheets else {
            return Err(Error::NotebookParse("\"worksheets\" is not a list".into()));
        };
        for worksheet in worksheets {
            if let Some(Value::Array(ws_cells)) = worksheet.get("cells") {
                for cell in ws_cells {
                    cells.push(upgrade_cell(cell.clone())?);
                }
            }
        }
    }

    let mut metadata = match nb.remove("metadata") {
        Some(Value::Object(metadata)) => metadata,
        _ => Map::new(),
    };
    metadata.remove("name");
    metadata.remove("signature");
    let orig = nb.remove("orig_nbformat").unwrap_or(Value::from(3));
    metadata.insert("orig_nbformat".into(), orig);

    let mut upgraded = Map::new();
    upgraded.insert("cells".into(), Value::Array(cells));
    upgraded.insert("metadata".into(), Value::Object(metadata));
    upgraded.insert("nbformat".into(), Value::from(NBFORMAT));
    upgraded.insert("nbformat_minor".into(), Value::from(NBFORMAT_MINOR));
    Ok(Value::Object(upgraded))
}

fn upgrade_cell(cell: Value) -> Result<Value> {
    let Value::Object(mut cell) = cell else {
        return Err(Error::NotebookParse("cell is not an object".into()));
    };
    let mut metadata = match cell.remove("metadata") {
        Some(Value::Object(metadata)) => metadata,
        _ => Map::new(),
    };
    let cell_type = cell
        .get("cell_type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut out = Map::new();
    match cell_type.as_str() {
        "code" => {
            cell.remove("language");
            if let Some(collapsed) = cell.remove("collapsed") {
                metadata.insert("collapsed".into(), collapsed);
            }
            out.insert("cell_type".into(), Value::from("code"));
            out.insert(
                "source".into(),
                cell.remove("input").unwrap_or(Value::from("")),
            );
            out.insert(
                "execution_count".into(),
                cell.remove("prompt_number").unwrap_or(Value::Null),
            );
            let outputs = match cell.remove("outputs") {
                Some(Value::Array(outputs)) => outputs
                    .into_iter()
                    .map(upgrade_output)
                    .collect::<Result<Vec<_>>>()?,
                _ => Vec::new(),
            };
            out.insert("outputs".into(), Value::Array(outputs));
        }
        "heading" => {
            let level = cell.get("level").and_then(Value::as_u64).unwrap_or(1) as usize;
            let text = cell.get("source").map(joined).unwrap_or_default();
            let text = text.lines().collect::<Vec<_>>().join(" ");
            out.insert("cell_type".into(), Value::from("markdown"));
            out.insert(
                "source".into(),
                Value::from(format!("{} {}", "#".repeat(level.clamp(1, 6)), text)),
            );
        }
        "html" | "markdown" => {
            out.insert("cell_type".into(), Value::from("markdown"));
            out.insert(
                "source".into(),
                cell.remove("source").unwrap_or(Value::from("")),
            );
        }
        "raw" => {
            out.insert("cell_type".into(), Value::from("raw"));
            out.insert(
                "source".into(),
                cell.remove("source").unwrap_or(Value::from("")),
            );
        }
        other => {
            return Err(Error::NotebookParse(format!(
                "unknown nbformat 3 cell type: {:?}",
                other
            )))
        }
    }
    out.insert("metadata".into(), Value::Object(metadata));
    Ok(Value::Object(out))
}

fn upgrade_output(output: Value) -> Result<Value> {
    let Value::Object(mut output) = output else {
        return Err(Error::NotebookParse("output is not an object".into()));
    };
    let output_type = output
        .get("output_type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut out = Map::new();
    match output_type.as_str() {
        "pyout" | "execute_result" | "display_data" => {
            if output_type == "display_data" {
                out.insert("output_type".into(), Value::from("display_data"));
            } else {
                out.insert("output_type".into(), Value::from("execute_result"));
                out.insert(
                    "execution_count".into(),
                    output.remove("prompt_number").unwrap_or(Value::Null),
                );
            }
            let mut data = Map::new();
            for (key, mime) in V3_MIME_KEYS {
                if let Some(value) = output.remove(key) {
                    data.insert(mime.into(), upgrade_mime_value(mime, value));
                }
            }
            out.insert("data".into(), Value::Object(data));
            let metadata = match output.remove("metadata") {
                Some(Value::Object(metadata)) => metadata,
                _ => Map::new(),
            };
            out.insert("metadata".into(), Value::Object(metadata));
        }
        "pyerr" | "error" => {
            out.insert("output_type".into(), Value::from("error"));
            for key in ["ename", "evalue"] {
                out.insert(key.into(), output.remove(key).unwrap_or(Value::from("")));
            }
            out.insert(
                "traceback".into(),
                output.remove("traceback").unwrap_or(Value::Array(Vec::new())),
            );
        }
        "stream" => {
            out.insert("output_type".into(), Value::from("stream"));
            let name = output
                .remove("stream")
                .or_else(|| output.remove("name"))
                .unwrap_or(Value::from("stdout"));
            out.insert("name".into(), name);
            out.insert(
                "text".into(),
                output.remove("text").unwrap_or(Value::from("")),
            );
        }
        other => {
            return Err(Error::NotebookParse(format!(
                "unknown nbformat 3 output type: {:?}",
                other
            )))
        }
    }
    Ok(Value::Object(out))
}

/// nbformat 3 stored JSON output as a string; v4 stores the object.
fn upgrade_mime_value(mime: &str, value: Value) -> Value {
    if mime == "application/json" {
        if let Some(text) = value.as_str() {
            if let Ok(parsed) = serde_json::from_str(text) {
                return parsed;
            }
        }
    }
    value
}

fn joined(value: &Value) -> String {
    crate::model::mime_text(value).unwrap_or_default()
}
