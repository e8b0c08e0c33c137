//! Notebook reading module.

mod reader;
mod upgrade;

pub use reader::NotebookReader;
pub use upgrade::upgrade_v3;
