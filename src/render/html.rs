//! Self-contained HTML rendering for notebooks.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{mime_text, Cell, Metadata, MimeBundle, Notebook, Output};

use super::markdown::{data_uri, markdown_to_html};
use super::template::{Layout, OutputKind};
use super::{BaseTemplate, RenderOptions, RenderResult, RenderStats, ReportRenderer, Resources};

/// MIME types the exporter can display, most preferred first.
const DISPLAY_PRIORITY: [&str; 7] = [
    "text/html",
    "text/markdown",
    "image/svg+xml",
    "text/latex",
    "image/png",
    "image/jpeg",
    "text/plain",
];

/// Raw cell MIME types passed through to HTML.
const RAW_HTML_MIMETYPES: [&str; 2] = ["", "text/html"];

const DEFAULT_PAGE_TITLE: &str = "Notebook";

/// MathJax delimiters matching those written for markdown math and used by
/// `text/latex` outputs.
const MATHJAX_CONFIG: &str = r#"<script>
window.MathJax = {
  tex: {
    inlineMath: [['$', '$'], ['\\(', '\\)']],
    displayMath: [['$$', '$$'], ['\\[', '\\]']],
    processEscapes: true
  }
};
</script>
"#;

/// Renders a notebook to a standalone HTML page.
///
/// # Example
///
/// ```
/// use nbreport::model::{Cell, Notebook};
/// use nbreport::render::{HtmlExporter, RenderOptions, ReportRenderer, Resources};
///
/// let mut nb = Notebook::new();
/// nb.push_cell(Cell::markdown("# Hello"));
///
/// let exporter = HtmlExporter::new();
/// let result = exporter
///     .render(&nb, &RenderOptions::default(), Resources::with_css(""))
///     .unwrap();
/// assert!(result.content.contains("<h1"));
/// ```
pub struct HtmlExporter {
    ansi_escape: Regex,
}

impl HtmlExporter {
    /// Create a new HTML exporter.
    pub fn new() -> Self {
        Self {
            ansi_escape: Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
                .unwrap(),
        }
    }

    /// Remove terminal escape sequences from text.
    pub fn strip_ansi<'t>(&self, text: &'t str) -> std::borrow::Cow<'t, str> {
        self.ansi_escape.replace_all(text, "")
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for HtmlExporter {
    fn name(&self) -> &str {
        "html"
    }

    fn render(
        &self,
        notebook: &Notebook,
        options: &RenderOptions,
        resources: Resources,
    ) -> Result<RenderResult> {
        let mut writer = HtmlWriter {
            exporter: self,
            options,
            template: options.base_template,
            layout: options.base_template.layout(),
            stats: RenderStats::new(),
            output: String::new(),
        };
        writer.render_document(notebook, &resources)?;

        let HtmlWriter { output, stats, .. } = writer;
        Ok(RenderResult::new(output, resources, stats))
    }
}

/// Per-render state.
struct HtmlWriter<'a> {
    exporter: &'a HtmlExporter,
    options: &'a RenderOptions,
    template: BaseTemplate,
    layout: &'static Layout,
    stats: RenderStats,
    output: String,
}

impl HtmlWriter<'_> {
    fn render_document(&mut self, notebook: &Notebook, resources: &Resources) -> Result<()> {
        let title = self
            .options
            .page_title
            .as_deref()
            .unwrap_or(DEFAULT_PAGE_TITLE);

        self.output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        self.output.push_str("<meta charset=\"utf-8\" />\n");
        self.output.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
        );
        writeln!(self.output, "<title>{}</title>", encode_text(title))?;
        write_style(&mut self.output, self.layout.stylesheet)?;
        for css in &resources.inlining.css {
            write_style(&mut self.output, css)?;
        }
        if let Some(url) = &self.options.mathjax_url {
            self.output.push_str(MATHJAX_CONFIG);
            writeln!(
                self.output,
                "<script id=\"MathJax-script\" async src=\"{}\"></script>",
                encode_double_quoted_attribute(url)
            )?;
        }
        self.output.push_str("</head>\n");

        if self.layout.body_class.is_empty() {
            self.output.push_str("<body>\n");
        } else {
            writeln!(self.output, "<body class=\"{}\">", self.layout.body_class)?;
        }
        self.output.push_str(self.layout.container_open);

        for cell in &notebook.cells {
            self.render_cell(cell)?;
        }

        self.output.push_str(self.layout.container_close);
        self.output.push_str("</body>\n</html>\n");
        Ok(())
    }

    fn render_cell(&mut self, cell: &Cell) -> Result<()> {
        match cell {
            Cell::Markdown {
                source,
                attachments,
                ..
            } => {
                self.stats.markdown_cells += 1;
                let body = markdown_to_html(source.as_str(), attachments.as_ref());
                writeln!(
                    self.output,
                    "<div class=\"{}\">\n<div class=\"{}\">\n{}</div>\n</div>",
                    self.layout.markdown_cell, self.layout.markdown_body, body
                )?;
            }
            Cell::Code {
                source,
                execution_count,
                outputs,
                ..
            } => {
                self.stats.code_cells += 1;
                self.render_code_cell(source.as_str(), *execution_count, outputs)?;
            }
            Cell::Raw {
                source, metadata, ..
            } => {
                let mimetype = raw_mimetype(metadata);
                if RAW_HTML_MIMETYPES.contains(&mimetype.as_str()) {
                    self.stats.raw_cells += 1;
                    writeln!(
                        self.output,
                        "<div class=\"{}\">\n{}\n</div>",
                        self.layout.raw_cell, source
                    )?;
                } else {
                    log::warn!("Skipping raw cell with MIME type {}", mimetype);
                    self.stats.skipped_raw_cells += 1;
                }
            }
        }
        Ok(())
    }

    fn render_code_cell(
        &mut self,
        source: &str,
        execution_count: Option<i64>,
        outputs: &[Output],
    ) -> Result<()> {
        if self.options.exclude_input {
            self.stats.hidden_inputs += 1;
            if outputs.is_empty() {
                return Ok(());
            }
        }

        let cell_start = self.output.len();
        writeln!(self.output, "<div class=\"{}\">", self.layout.code_cell)?;

        if !self.options.exclude_input {
            writeln!(
                self.output,
                "<div class=\"{}\">\n<div class=\"{}\">In&nbsp;[{}]:</div>\n<pre><code>{}</code></pre>\n</div>",
                self.layout.input_area,
                self.layout.input_prompt,
                prompt_number(execution_count),
                encode_text(source)
            )?;
        }

        if !outputs.is_empty() {
            let wrapper_start = self.output.len();
            let rendered_before = self.stats.outputs;
            writeln!(self.output, "<div class=\"{}\">", self.layout.output_wrapper)?;
            for output in outputs {
                self.render_output(output)?;
            }

            if self.stats.outputs > rendered_before {
                self.output.push_str("</div>\n");
            } else if self.options.exclude_input {
                // nothing visible is left of this cell
                self.output.truncate(cell_start);
                return Ok(());
            } else {
                self.output.truncate(wrapper_start);
            }
        }

        self.output.push_str("</div>\n");
        Ok(())
    }

    fn render_output(&mut self, output: &Output) -> Result<()> {
        let (prompt, kind, body) = match output {
            Output::Stream { name, text } => {
                let kind = if name == "stderr" {
                    OutputKind::Stderr
                } else {
                    OutputKind::Stdout
                };
                (None, kind, self.preformatted(text.as_str()))
            }
            Output::Error { traceback, .. } => {
                let text = traceback.join("\n");
                (None, OutputKind::Error, self.preformatted(&text))
            }
            Output::DisplayData { data, metadata } => match self.render_mime(data, metadata)? {
                Some((kind, body)) => (None, kind, body),
                None => return Ok(()),
            },
            Output::ExecuteResult {
                execution_count,
                data,
                metadata,
            } => match self.render_mime(data, metadata)? {
                Some((kind, body)) => (Some(*execution_count), kind, body),
                None => return Ok(()),
            },
        };

        self.stats.outputs += 1;
        writeln!(self.output, "<div class=\"{}\">", self.layout.output_area)?;
        if let Some(count) = prompt {
            writeln!(
                self.output,
                "<div class=\"{}\">Out[{}]:</div>",
                self.layout.output_prompt,
                prompt_number(count)
            )?;
        }
        writeln!(
            self.output,
            "<div class=\"{}\">\n{}\n</div>\n</div>",
            self.template.output_class(kind),
            body
        )?;
        Ok(())
    }

    /// Pick the preferred MIME type of a bundle and render it.
    fn render_mime(
        &mut self,
        data: &MimeBundle,
        metadata: &Metadata,
    ) -> Result<Option<(OutputKind, String)>> {
        let Some((mime, value)) = DISPLAY_PRIORITY
            .iter()
            .find_map(|mime| data.get(*mime).map(|value| (*mime, value)))
        else {
            log::warn!(
                "No displayable MIME type among {:?}",
                data.keys().collect::<Vec<_>>()
            );
            self.stats.skipped_outputs += 1;
            return Ok(None);
        };

        let text = mime_text(value)
            .ok_or_else(|| Error::Render(format!("{} output data is not text", mime)))?;

        let rendered = match mime {
            "text/html" => (OutputKind::Html, text),
            "text/markdown" => (OutputKind::Markdown, markdown_to_html(&text, None)),
            "image/svg+xml" => (OutputKind::Svg, text),
            "text/latex" => (OutputKind::Latex, encode_text(&text).into_owned()),
            "image/png" | "image/jpeg" => {
                self.stats.images += 1;
                (OutputKind::Image, image_tag(mime, &text, metadata))
            }
            _ => (OutputKind::Text, self.preformatted(&text)),
        };
        Ok(Some(rendered))
    }

    fn preformatted(&self, text: &str) -> String {
        let plain = self.exporter.strip_ansi(text);
        format!("<pre>{}</pre>", encode_text(&plain))
    }
}

fn write_style(output: &mut String, css: &str) -> Result<()> {
    writeln!(output, "<style type=\"text/css\">\n{}\n</style>", css)?;
    Ok(())
}

fn prompt_number(count: Option<i64>) -> String {
    count.map(|n| n.to_string()).unwrap_or_else(|| " ".to_string())
}

fn raw_mimetype(metadata: &Metadata) -> String {
    metadata
        .get("raw_mimetype")
        .or_else(|| metadata.get("format"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase()
}

fn image_tag(mime: &str, data: &str, metadata: &Metadata) -> String {
    let mut tag = format!(
        "<img src=\"{}\"",
        encode_double_quoted_attribute(&data_uri(mime, data))
    );
    if let Some(Value::Object(size)) = metadata.get(mime) {
        for dimension in ["width", "height"] {
            if let Some(value) = size.get(dimension).and_then(Value::as_u64) {
                let _ = write!(tag, " {}=\"{}\"", dimension, value);
            }
        }
    }
    tag.push_str(" />");
    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MultilineString;
    use serde_json::json;

    fn render(nb: &Notebook, options: &RenderOptions) -> RenderResult {
        HtmlExporter::new()
            .render(nb, options, Resources::with_css(""))
            .unwrap()
    }

    fn code_cell(source: &str, outputs: Vec<Output>) -> Cell {
        Cell::Code {
            id: None,
            metadata: Metadata::new(),
            source: source.into(),
            execution_count: Some(7),
            outputs,
        }
    }

    fn stream(text: &str) -> Output {
        Output::Stream {
            name: "stdout".into(),
            text: MultilineString::new(text),
        }
    }

    #[test]
    fn test_document_shell() {
        let options = RenderOptions::new().with_page_title("My <Report>");
        let html = render(&Notebook::new(), &options).content;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My &lt;Report&gt;</title>"));
        assert!(html.contains("id=\"notebook-container\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_user_css_after_base_css() {
        let resources = Resources::with_css("h1 { color: red; }");
        let html = HtmlExporter::new()
            .render(&Notebook::new(), &RenderOptions::default(), resources)
            .unwrap()
            .content;
        let base = html.find("#notebook-container").unwrap();
        let user = html.find("h1 { color: red; }").unwrap();
        assert!(base < user);
    }

    #[test]
    fn test_exclude_input_hides_source_keeps_output() {
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("secret_source()", vec![stream("visible output\n")]));

        let options = RenderOptions::new().with_exclude_input(true);
        let result = render(&nb, &options);
        assert!(!result.content.contains("secret_source"));
        assert!(result.content.contains("visible output"));
        assert_eq!(result.stats.hidden_inputs, 1);
        assert_eq!(result.stats.outputs, 1);
    }

    #[test]
    fn test_include_input() {
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("a < b", vec![]));

        let html = render(&nb, &RenderOptions::default()).content;
        assert!(html.contains("<pre><code>a &lt; b</code></pre>"));
        assert!(html.contains("In&nbsp;[7]:"));
    }

    #[test]
    fn test_hidden_input_without_outputs_renders_nothing() {
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("x = 1", vec![]));

        let options = RenderOptions::new().with_exclude_input(true);
        let html = render(&nb, &options).content;
        assert!(!html.contains("code_cell"));
    }

    #[test]
    fn test_mime_priority() {
        let output = Output::ExecuteResult {
            execution_count: Some(2),
            data: [
                ("text/plain".to_string(), json!("<DataFrame>")),
                ("text/html".to_string(), json!(["<table>", "</table>"])),
            ]
            .into_iter()
            .collect(),
            metadata: Metadata::new(),
        };
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("df", vec![output]));

        let html = render(&nb, &RenderOptions::new().with_exclude_input(true)).content;
        assert!(html.contains("<table></table>"));
        assert!(!html.contains("&lt;DataFrame&gt;"));
        assert!(html.contains("Out[2]:"));
    }

    #[test]
    fn test_image_output() {
        let output = Output::DisplayData {
            data: [("image/png".to_string(), json!("iVBOR\n"))]
                .into_iter()
                .collect(),
            metadata: json!({"image/png": {"width": 320}})
                .as_object()
                .cloned()
                .unwrap(),
        };
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("plot()", vec![output]));

        let result = render(&nb, &RenderOptions::new().with_exclude_input(true));
        assert!(result
            .content
            .contains("<img src=\"data:image/png;base64,iVBOR\" width=\"320\" />"));
        assert_eq!(result.stats.images, 1);
    }

    #[test]
    fn test_image_data_must_be_text() {
        let output = Output::DisplayData {
            data: [("image/png".to_string(), json!([1, 2, 3]))]
                .into_iter()
                .collect(),
            metadata: Metadata::new(),
        };
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("plot()", vec![output]));

        let result = HtmlExporter::new().render(&nb, &RenderOptions::default(), Resources::new());
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_undisplayable_output_skipped() {
        let output = Output::DisplayData {
            data: [("application/vnd.custom".to_string(), json!({}))]
                .into_iter()
                .collect(),
            metadata: Metadata::new(),
        };
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("w", vec![output]));

        let result = render(&nb, &RenderOptions::default());
        assert_eq!(result.stats.skipped_outputs, 1);
        assert_eq!(result.stats.outputs, 0);
    }

    #[test]
    fn test_hidden_input_with_only_undisplayable_outputs_renders_nothing() {
        let widget = Output::DisplayData {
            data: [("application/vnd.jupyter.widget-view+json".to_string(), json!({}))]
                .into_iter()
                .collect(),
            metadata: Metadata::new(),
        };
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("slider", vec![widget.clone(), widget]));

        let result = render(&nb, &RenderOptions::new().with_exclude_input(true));
        assert!(!result.content.contains("code_cell"));
        assert!(!result.content.contains("output_wrapper"));
        assert_eq!(result.stats.skipped_outputs, 2);
        assert_eq!(result.stats.code_cells, 1);
    }

    #[test]
    fn test_shown_input_with_undisplayable_outputs_has_no_wrapper() {
        let widget = Output::DisplayData {
            data: [("application/vnd.custom".to_string(), json!({}))]
                .into_iter()
                .collect(),
            metadata: Metadata::new(),
        };
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("slider", vec![widget]));

        let html = render(&nb, &RenderOptions::default()).content;
        assert!(html.contains("code_cell"));
        assert!(html.contains("slider"));
        assert!(!html.contains("output_wrapper"));
    }

    #[test]
    fn test_mathjax_loaded_for_markdown_math() {
        let mut nb = Notebook::new();
        nb.push_cell(Cell::markdown(r"Cost is $a*b*c$ for $\{x\}$"));

        let html = render(&nb, &RenderOptions::default()).content;
        assert!(html.contains(r"\(a*b*c\)"));
        assert!(html.contains(r"\(\{x\}\)"));
        let script = html.find("id=\"MathJax-script\"").unwrap();
        assert!(script < html.find("</head>").unwrap());
        assert!(html.contains(crate::render::DEFAULT_MATHJAX_URL));
    }

    #[test]
    fn test_mathjax_can_be_disabled() {
        let html = render(&Notebook::new(), &RenderOptions::new().without_mathjax()).content;
        assert!(!html.contains("MathJax"));
    }

    #[test]
    fn test_error_traceback_strips_ansi() {
        let output = Output::Error {
            ename: "ZeroDivisionError".into(),
            evalue: "division by zero".into(),
            traceback: vec!["\u{1b}[0;31mZeroDivisionError\u{1b}[0m: division by zero".into()],
        };
        let mut nb = Notebook::new();
        nb.push_cell(code_cell("1/0", vec![output]));

        let html = render(&nb, &RenderOptions::default()).content;
        assert!(html.contains("<pre>ZeroDivisionError: division by zero</pre>"));
        assert!(html.contains("output_error"));
    }

    #[test]
    fn test_raw_cells() {
        let mut nb = Notebook::new();
        nb.push_cell(Cell::raw("<b>raw html</b>"));
        let mut latex = Metadata::new();
        latex.insert("raw_mimetype".into(), json!("text/latex"));
        nb.push_cell(Cell::Raw {
            id: None,
            metadata: latex,
            source: "\\section{x}".into(),
            attachments: None,
        });

        let result = render(&nb, &RenderOptions::default());
        assert!(result.content.contains("<b>raw html</b>"));
        assert!(!result.content.contains("\\section"));
        assert_eq!(result.stats.raw_cells, 1);
        assert_eq!(result.stats.skipped_raw_cells, 1);
    }

    #[test]
    fn test_lab_layout() {
        let mut nb = Notebook::new();
        nb.push_cell(Cell::markdown("text"));
        let options = RenderOptions::new().with_base_template(BaseTemplate::Lab);

        let html = render(&nb, &options).content;
        assert!(html.contains("<body class=\"jp-Notebook\">"));
        assert!(html.contains("jp-MarkdownCell"));
        assert!(!html.contains("notebook-container"));
    }

    #[test]
    fn test_resources_returned() {
        let result = HtmlExporter::new()
            .render(
                &Notebook::new(),
                &RenderOptions::default(),
                Resources::with_css("p {}"),
            )
            .unwrap();
        assert_eq!(result.resources.inlining.css, vec!["p {}".to_string()]);
    }
}
