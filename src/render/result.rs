//! Rendering result, resources and statistics.

use serde::{Deserialize, Serialize};

/// Side table handed to and returned by a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Content inlined into the output document
    pub inlining: Inlining,
}

impl Resources {
    /// Create empty resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create resources carrying a single stylesheet (possibly empty).
    pub fn with_css(css: impl Into<String>) -> Self {
        Self {
            inlining: Inlining {
                css: vec![css.into()],
            },
        }
    }
}

/// Inlined content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inlining {
    /// Stylesheets, emitted in order after the base layout CSS
    pub css: Vec<String>,
}

/// Result of rendering a notebook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered document
    pub content: String,

    /// Resources used for rendering
    pub resources: Resources,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, resources: Resources, stats: RenderStats) -> Self {
        Self {
            content,
            resources,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Markdown cells rendered
    pub markdown_cells: u32,

    /// Code cells seen
    pub code_cells: u32,

    /// Raw cells emitted
    pub raw_cells: u32,

    /// Raw cells dropped because of their MIME type
    pub skipped_raw_cells: u32,

    /// Code inputs hidden
    pub hidden_inputs: u32,

    /// Outputs rendered
    pub outputs: u32,

    /// Outputs with no displayable MIME type
    pub skipped_outputs: u32,

    /// Images embedded as data URIs
    pub images: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of cells visited.
    pub fn cell_count(&self) -> u32 {
        self.markdown_cells + self.code_cells + self.raw_cells + self.skipped_raw_cells
    }
}
