//! Synthesized markdown cells.

use std::path::Path;

use crate::model::Cell;

/// Build the title block cell.
///
/// The first line is always `# <title>`. Author and date lines follow a
/// blank line, in that order, and only when non-empty.
pub fn title_cell(title: &str, author: &str, date: &str) -> Cell {
    let mut lines = vec![format!("# {}", title)];

    let mut meta = Vec::new();
    if !author.is_empty() {
        meta.push(format!("**Author:** {}", author));
    }
    if !date.is_empty() {
        meta.push(format!("**Date:** {}", date));
    }
    if !meta.is_empty() {
        lines.push(String::new());
        lines.extend(meta);
    }

    Cell::markdown(lines.join("\n"))
}

/// Build a section header cell for one merged notebook.
pub fn section_cell(name: &str) -> Cell {
    Cell::markdown(format!("# {}", name))
}

/// Derive a section name from a notebook path (file name without extension).
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
