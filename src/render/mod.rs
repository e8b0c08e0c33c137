//! Rendering module for converting notebooks to report formats.
//!
//! Renderers implement [`ReportRenderer`] so the report pipeline can be
//! driven by any implementation; [`HtmlExporter`] is the built-in one.

mod html;
mod json;
mod markdown;
mod options;
mod result;
mod template;

pub use html::HtmlExporter;
pub use json::{to_json, JsonFormat};
pub use markdown::{data_uri, heading_slug, markdown_to_html};
pub use options::{BaseTemplate, RenderOptions, DEFAULT_MATHJAX_URL};
pub use result::{Inlining, RenderResult, RenderStats, Resources};

use crate::error::Result;
use crate::model::Notebook;

/// A component that turns a notebook into a report document.
pub trait ReportRenderer {
    /// Short name of the output format.
    fn name(&self) -> &str;

    /// Render a notebook.
    ///
    /// `resources` is passed through to the result, as received.
    fn render(
        &self,
        notebook: &Notebook,
        options: &RenderOptions,
        resources: Resources,
    ) -> Result<RenderResult>;
}
