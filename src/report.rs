//! Report assembly: validation, merging, title block, rendering and output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::merge::{ensure_inputs_exist, merge_notebooks, resolve_date, title_cell, today};
use crate::model::Notebook;
use crate::render::{
    BaseTemplate, HtmlExporter, RenderOptions, RenderResult, ReportRenderer, Resources,
};

/// Default report title.
pub const DEFAULT_TITLE: &str = "Project Report";

/// Default stylesheet looked up next to the working directory.
pub const DEFAULT_STYLES: &str = "styles.css";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "report.html";

/// Builder for merging notebooks into a report.
///
/// # Example
///
/// ```no_run
/// use nbreport::{BaseTemplate, ReportBuilder};
///
/// let written = ReportBuilder::new()
///     .title("Quarterly Analysis")
///     .author("Data Team")
///     .base_template(BaseTemplate::Lab)
///     .build(&["01-load.ipynb", "02-model.ipynb"])?
///     .write("report.html")?;
/// println!("Wrote {}", written.display());
/// # Ok::<(), nbreport::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    title: String,
    author: String,
    date: String,
    section_headers: bool,
    styles: Option<PathBuf>,
    base_template: BaseTemplate,
    today: Option<NaiveDate>,
}

impl ReportBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: String::new(),
            date: String::new(),
            section_headers: true,
            styles: Some(PathBuf::from(DEFAULT_STYLES)),
            base_template: BaseTemplate::default(),
            today: None,
        }
    }

    /// Set the report title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author shown in the title block (empty to omit).
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set an explicit date string (blank to use today's date).
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Enable or disable per-notebook section headers.
    pub fn section_headers(mut self, enabled: bool) -> Self {
        self.section_headers = enabled;
        self
    }

    /// Set the stylesheet to inline if it exists.
    pub fn styles(mut self, path: impl Into<PathBuf>) -> Self {
        self.styles = Some(path.into());
        self
    }

    /// Do not look for a stylesheet at all.
    pub fn no_styles(mut self) -> Self {
        self.styles = None;
        self
    }

    /// Set the base page layout.
    pub fn base_template(mut self, template: BaseTemplate) -> Self {
        self.base_template = template;
        self
    }

    /// Override the date used when no explicit date is set.
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// Validate inputs, merge them, and prepend the title block.
    ///
    /// Every path is checked for existence before any is read.
    pub fn build<P: AsRef<Path>>(self, paths: &[P]) -> Result<Report> {
        ensure_inputs_exist(paths)?;

        let date = resolve_date(&self.date, self.today.unwrap_or_else(today));
        let mut notebook = merge_notebooks(paths, self.section_headers)?;
        notebook.insert_cell(0, title_cell(&self.title, &self.author, &date));
        log::debug!(
            "Built report \"{}\" with {} cells from {} notebooks",
            self.title,
            notebook.cell_count(),
            paths.len()
        );

        Ok(Report {
            notebook,
            options: RenderOptions::new()
                .with_exclude_input(true)
                .with_base_template(self.base_template)
                .with_page_title(self.title),
            styles: self.styles,
        })
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A merged report ready for rendering.
#[derive(Debug, Clone)]
pub struct Report {
    notebook: Notebook,
    options: RenderOptions,
    styles: Option<PathBuf>,
}

impl Report {
    /// The merged notebook, title cell first.
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Options passed to the renderer.
    pub fn render_options(&self) -> &RenderOptions {
        &self.options
    }

    /// Consume the report and return the merged notebook.
    pub fn into_notebook(self) -> Notebook {
        self.notebook
    }

    /// Render with the built-in HTML exporter.
    pub fn render(&self) -> Result<RenderResult> {
        self.render_with(&HtmlExporter::new())
    }

    /// Render with a given renderer.
    pub fn render_with(&self, renderer: &dyn ReportRenderer) -> Result<RenderResult> {
        let css = load_styles(self.styles.as_deref())?;
        let result = renderer.render(&self.notebook, &self.options, Resources::with_css(css))?;
        log::debug!(
            "Rendered {} cells with {} renderer ({} bytes)",
            result.stats.cell_count(),
            renderer.name(),
            result.content_len()
        );
        Ok(result)
    }

    /// Render with the built-in HTML exporter and write the result.
    ///
    /// Returns the absolute path of the written file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let result = self.render()?;
        write_report(path, &result.content)
    }
}

/// Read the stylesheet to inline, or an empty one if the file is absent.
pub fn load_styles(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.exists() => {
            log::debug!("Inlining styles from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        Some(path) => {
            log::debug!("No stylesheet at {}, using an empty one", path.display());
            Ok(String::new())
        }
        None => Ok(String::new()),
    }
}

/// Write rendered text as UTF-8, replacing any existing file.
///
/// Returns the absolute path of the written file.
pub fn write_report<P: AsRef<Path>>(path: P, content: &str) -> Result<PathBuf> {
    let path = path.as_ref();
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::write(path, content.as_bytes()).map_err(write_error)?;
    let resolved = fs::canonicalize(path).map_err(write_error)?;
    log::info!("Wrote {} bytes to {}", content.len(), resolved.display());
    Ok(resolved)
}
