//! Notebook model types.
//!
//! This module defines the in-memory representation of an nbformat v4
//! notebook. Readers upgrade older formats into this shape, the merger
//! splices cell lists together, and renderers consume it. Cell content is
//! treated as opaque everywhere except in renderers.

mod cell;
mod notebook;
mod output;
mod source;

pub use cell::{Attachments, Cell, CellType};
pub use notebook::{Notebook, NBFORMAT, NBFORMAT_MINOR};
pub use output::{mime_text, MimeBundle, Output};
pub use source::MultilineString;

/// Free-form JSON metadata attached to notebooks, cells and outputs.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
