//! Notebook merging.
//!
//! Everything here is deterministic except [`today`], which reads the
//! local clock and is kept apart so the rest can be tested without one.

mod date;
mod merger;
mod synth;
mod validate;

pub use date::{resolve_date, today};
pub use merger::{merge_documents, merge_notebooks};
pub use synth::{display_name, section_cell, title_cell};
pub use validate::ensure_inputs_exist;
