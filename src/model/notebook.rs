//! Notebook-level types.

use super::{Cell, CellType, Metadata};
use serde::{Deserialize, Serialize};

/// nbformat major version produced by this crate.
pub const NBFORMAT: u32 = 4;

/// nbformat minor version of freshly created notebooks.
pub const NBFORMAT_MINOR: u32 = 5;

/// A notebook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Cells in document order
    pub cells: Vec<Cell>,

    /// Notebook metadata (kernelspec, language_info, ...)
    #[serde(default)]
    pub metadata: Metadata,

    /// nbformat major version
    pub nbformat: u32,

    /// nbformat minor version
    pub nbformat_minor: u32,
}

impl Notebook {
    /// Create a new empty notebook with empty metadata.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: Metadata::new(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Count cells of a given kind.
    pub fn count_cells(&self, cell_type: CellType) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.cell_type() == cell_type)
            .count()
    }

    /// Check if the notebook has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append a cell.
    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Insert a cell at a position, shifting later cells.
    pub fn insert_cell(&mut self, index: usize, cell: Cell) {
        self.cells.insert(index, cell);
    }

    /// Move all cells of another notebook to the end of this one.
    pub fn append_cells(&mut self, other: Notebook) {
        self.cells.extend(other.cells);
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}
