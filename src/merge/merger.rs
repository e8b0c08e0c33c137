//! Cell-list concatenation.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Notebook;
use crate::parser::NotebookReader;

use super::synth::{display_name, section_cell};

/// Read notebooks in order and concatenate their cells.
///
/// With `section_headers`, each notebook's cells are preceded by a
/// `# <file stem>` markdown cell. The result has empty metadata and no
/// title cell; callers insert the title at index 0.
///
/// # Example
///
/// ```no_run
/// use nbreport::merge::merge_notebooks;
///
/// let merged = merge_notebooks(&["intro.ipynb", "results.ipynb"], true)?;
/// println!("{} cells", merged.cell_count());
/// # Ok::<(), nbreport::Error>(())
/// ```
pub fn merge_notebooks<P: AsRef<Path>>(paths: &[P], section_headers: bool) -> Result<Notebook> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let notebook = NotebookReader::open(path)
            .and_then(NotebookReader::parse)
            .map_err(|e| Error::document_read(path, e))?;
        documents.push((display_name(path), notebook));
    }
    Ok(merge_documents(documents, section_headers))
}

/// Concatenate already loaded notebooks, keyed by section name.
pub fn merge_documents<I>(documents: I, section_headers: bool) -> Notebook
where
    I: IntoIterator<Item = (String, Notebook)>,
{
    let mut merged = Notebook::new();
    let mut sources = 0usize;

    for (name, notebook) in documents {
        log::debug!("Merging {} ({} cells)", name, notebook.cell_count());
        if section_headers {
            merged.push_cell(section_cell(&name));
        }
        merged.append_cells(notebook);
        sources += 1;
    }

    log::debug!(
        "Merged {} notebooks into {} cells",
        sources,
        merged.cell_count()
    );
    merged
}
