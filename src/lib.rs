//! # nbreport
//!
//! Merge Jupyter notebooks into a single, code-free HTML report.
//!
//! Notebooks are read in the given order, their cells are concatenated
//! behind a generated title block (and optional `# <notebook name>`
//! section headers), and the merged notebook is rendered to one
//! self-contained HTML page with code inputs hidden.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nbreport::ReportBuilder;
//!
//! fn main() -> nbreport::Result<()> {
//!     let path = ReportBuilder::new()
//!         .title("Project Report")
//!         .author("Ada")
//!         .build(&["explore.ipynb", "results.ipynb"])?
//!         .write("report.html")?;
//!     println!("Wrote {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **nbformat 3 and 4 input**: v3 notebooks are upgraded in memory
//! - **Deterministic merging**: output cell order is input order
//! - **Pluggable rendering**: any [`render::ReportRenderer`] can be used
//! - **Two built-in layouts**: `classic` and `lab`
//! - **Self-contained output**: images and stylesheets are inlined

pub mod detect;
pub mod error;
pub mod merge;
pub mod model;
pub mod parser;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_notebook, NotebookFormat};
pub use error::{Error, Result};
pub use merge::{
    display_name, ensure_inputs_exist, merge_documents, merge_notebooks, resolve_date,
    section_cell, title_cell,
};
pub use model::{Cell, CellType, MultilineString, Notebook, Output};
pub use parser::NotebookReader;
pub use render::{
    to_json, BaseTemplate, HtmlExporter, JsonFormat, RenderOptions, RenderResult, ReportRenderer,
    Resources,
};
pub use report::{load_styles, write_report, Report, ReportBuilder};

use std::path::Path;

/// Read a notebook file, upgrading nbformat 3 to 4.
///
/// # Example
///
/// ```no_run
/// use nbreport::read_notebook;
///
/// let nb = read_notebook("analysis.ipynb").unwrap();
/// println!("Cells: {}", nb.cell_count());
/// ```
pub fn read_notebook<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    NotebookReader::open(path)?.parse()
}

/// Read a notebook from bytes.
pub fn read_notebook_bytes(data: &[u8]) -> Result<Notebook> {
    NotebookReader::from_bytes(data)?.parse()
}

/// Render a notebook to HTML with the built-in exporter.
///
/// # Example
///
/// ```
/// use nbreport::{to_html, Cell, Notebook, RenderOptions};
///
/// let mut nb = Notebook::new();
/// nb.push_cell(Cell::markdown("Hello"));
/// let html = to_html(&nb, &RenderOptions::default(), "").unwrap();
/// assert!(html.contains("<p>Hello</p>"));
/// ```
pub fn to_html(notebook: &Notebook, options: &RenderOptions, css: &str) -> Result<String> {
    let result = HtmlExporter::new().render(notebook, options, Resources::with_css(css))?;
    Ok(result.content)
}
