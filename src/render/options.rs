//! Rendering options and configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// MathJax bundle loaded to typeset math in the rendered page.
pub const DEFAULT_MATHJAX_URL: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-chtml-full.js";

/// Options for rendering a notebook.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Hide code cell inputs (outputs are still shown)
    pub exclude_input: bool,

    /// Built-in page layout
    pub base_template: BaseTemplate,

    /// Text of the HTML `<title>` element
    pub page_title: Option<String>,

    /// MathJax script URL (`None` leaves math as plain delimited text)
    pub mathjax_url: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            exclude_input: false,
            base_template: BaseTemplate::default(),
            page_title: None,
            mathjax_url: Some(DEFAULT_MATHJAX_URL.to_string()),
        }
    }
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable hiding of code inputs.
    pub fn with_exclude_input(mut self, exclude: bool) -> Self {
        self.exclude_input = exclude;
        self
    }

    /// Set the base layout.
    pub fn with_base_template(mut self, template: BaseTemplate) -> Self {
        self.base_template = template;
        self
    }

    /// Set the page title.
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    /// Load MathJax from another URL.
    pub fn with_mathjax_url(mut self, url: impl Into<String>) -> Self {
        self.mathjax_url = Some(url.into());
        self
    }

    /// Do not load MathJax.
    pub fn without_mathjax(mut self) -> Self {
        self.mathjax_url = None;
        self
    }
}

/// Built-in page layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseTemplate {
    /// Classic Notebook look
    #[default]
    Classic,
    /// JupyterLab look
    Lab,
}

impl BaseTemplate {
    /// All accepted layouts, default first.
    pub const ALL: [BaseTemplate; 2] = [BaseTemplate::Classic, BaseTemplate::Lab];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            BaseTemplate::Classic => "classic",
            BaseTemplate::Lab => "lab",
        }
    }
}

impl fmt::Display for BaseTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BaseTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseTemplate::ALL
            .into_iter()
            .find(|template| template.name() == s)
            .ok_or_else(|| {
                Error::Other(format!(
                    "Unknown base template {:?} (expected \"classic\" or \"lab\")",
                    s
                ))
            })
    }
}
