//! Built-in page layouts.

use super::BaseTemplate;

/// Class names and stylesheet of one layout.
pub(crate) struct Layout {
    pub body_class: &'static str,
    pub container_open: &'static str,
    pub container_close: &'static str,
    pub markdown_cell: &'static str,
    pub markdown_body: &'static str,
    pub raw_cell: &'static str,
    pub code_cell: &'static str,
    pub input_area: &'static str,
    pub input_prompt: &'static str,
    pub output_wrapper: &'static str,
    pub output_area: &'static str,
    pub output_prompt: &'static str,
    pub stylesheet: &'static str,
}

/// What an output area contains, for picking its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputKind {
    Stdout,
    Stderr,
    Html,
    Markdown,
    Svg,
    Latex,
    Image,
    Text,
    Error,
}

impl BaseTemplate {
    pub(crate) fn layout(self) -> &'static Layout {
        match self {
            BaseTemplate::Classic => &CLASSIC,
            BaseTemplate::Lab => &LAB,
        }
    }

    pub(crate) fn output_class(self, kind: OutputKind) -> &'static str {
        match self {
            BaseTemplate::Classic => match kind {
                OutputKind::Stdout => "output_subarea output_stream output_stdout output_text",
                OutputKind::Stderr => "output_subarea output_stream output_stderr output_text",
                OutputKind::Html => "output_subarea output_html rendered_html",
                OutputKind::Markdown => "output_subarea output_markdown rendered_html",
                OutputKind::Svg => "output_subarea output_svg",
                OutputKind::Latex => "output_subarea output_latex",
                OutputKind::Image => "output_subarea output_image",
                OutputKind::Text => "output_subarea output_text",
                OutputKind::Error => "output_subarea output_text output_error",
            },
            BaseTemplate::Lab => match kind {
                OutputKind::Stdout => "jp-RenderedText jp-OutputArea-output",
                OutputKind::Stderr => "jp-RenderedText jp-OutputArea-output jp-OutputArea-stderr",
                OutputKind::Html => "jp-RenderedHTMLCommon jp-RenderedHTML jp-OutputArea-output",
                OutputKind::Markdown => {
                    "jp-RenderedHTMLCommon jp-RenderedMarkdown jp-OutputArea-output"
                }
                OutputKind::Svg => "jp-RenderedSVG jp-OutputArea-output",
                OutputKind::Latex => "jp-RenderedLatex jp-OutputArea-output",
                OutputKind::Image => "jp-RenderedImage jp-OutputArea-output",
                OutputKind::Text => "jp-RenderedText jp-OutputArea-output",
                OutputKind::Error => "jp-RenderedText jp-OutputArea-output jp-OutputArea-error",
            },
        }
    }
}

static CLASSIC: Layout = Layout {
    body_class: "",
    container_open: "<div tabindex=\"-1\" id=\"notebook\" class=\"border-box-sizing\">\n<div class=\"container\" id=\"notebook-container\">\n",
    container_close: "</div>\n</div>\n",
    markdown_cell: "cell border-box-sizing text_cell rendered",
    markdown_body: "inner_cell text_cell_render border-box-sizing rendered_html",
    raw_cell: "cell border-box-sizing raw_cell",
    code_cell: "cell border-box-sizing code_cell rendered",
    input_area: "input",
    input_prompt: "prompt input_prompt",
    output_wrapper: "output_wrapper",
    output_area: "output_area",
    output_prompt: "prompt output_prompt",
    stylesheet: CLASSIC_CSS,
};

static LAB: Layout = Layout {
    body_class: "jp-Notebook",
    container_open: "<main>\n",
    container_close: "</main>\n",
    markdown_cell: "jp-Cell jp-MarkdownCell jp-Notebook-cell",
    markdown_body: "jp-RenderedHTMLCommon jp-RenderedMarkdown jp-MarkdownOutput",
    raw_cell: "jp-Cell jp-RawCell jp-Notebook-cell",
    code_cell: "jp-Cell jp-CodeCell jp-Notebook-cell",
    input_area: "jp-Cell-inputWrapper jp-InputArea",
    input_prompt: "jp-InputPrompt jp-InputArea-prompt",
    output_wrapper: "jp-Cell-outputWrapper jp-OutputArea",
    output_area: "jp-OutputArea-child",
    output_prompt: "jp-OutputPrompt jp-OutputArea-prompt",
    stylesheet: LAB_CSS,
};

const CLASSIC_CSS: &str = r#"
body { margin: 0; background: #fff; color: #000;
  font-family: "Helvetica Neue", Helvetica, Arial, sans-serif; font-size: 13px; line-height: 1.42857143; }
#notebook { padding-top: 20px; }
#notebook-container { max-width: 940px; margin: 0 auto; padding: 15px;
  box-shadow: 0px 0px 12px 1px rgba(87, 87, 87, 0.2); }
.border-box-sizing { box-sizing: border-box; }
.cell { padding: 5px; margin: 0; width: 100%; }
.rendered_html h1 { font-size: 185.7%; margin: 1.08em 0 0 0; }
.rendered_html h2 { font-size: 157.1%; margin: 1.27em 0 0 0; }
.rendered_html h3 { font-size: 128.6%; margin: 1.55em 0 0 0; }
.rendered_html table { border-collapse: collapse; border: none; margin: 1em auto; }
.rendered_html th, .rendered_html td { padding: 0.5em 0.5em; border: none; text-align: right; }
.rendered_html thead { border-bottom: 1px solid black; }
.rendered_html tbody tr:nth-child(odd) { background: #f5f5f5; }
.rendered_html img { max-width: 100%; }
a.anchor-link { padding: 0 5px; text-decoration: none; visibility: hidden; }
h1:hover a.anchor-link, h2:hover a.anchor-link, h3:hover a.anchor-link,
h4:hover a.anchor-link, h5:hover a.anchor-link, h6:hover a.anchor-link { visibility: visible; }
.prompt { min-width: 14ex; padding: 0.4em; font-family: monospace; text-align: right; color: #303F9F; }
.output_prompt { color: #D84315; }
.input_area pre, .input pre { background: #f7f7f7; border: 1px solid #cfcfcf; border-radius: 2px; padding: 0.4em; }
.output_area { display: flex; }
.output_subarea { overflow-x: auto; padding: 0.4em; flex: 1; }
.output_text pre { margin: 0; white-space: pre-wrap; }
.output_stderr { background: #fdd; }
.output_error pre { color: #a00; }
"#;

const LAB_CSS: &str = r#"
body.jp-Notebook { margin: 0; padding: 24px; background: #fff; color: rgba(0, 0, 0, 0.87);
  font-family: system-ui, -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; font-size: 14px; }
main { max-width: 1100px; margin: 0 auto; }
.jp-Cell { padding: 4px 4px 4px 16px; margin: 0; }
.jp-RenderedHTMLCommon { line-height: 1.5; }
.jp-RenderedHTMLCommon h1 { font-size: 2.2em; margin: 0.67em 0; }
.jp-RenderedHTMLCommon h2 { font-size: 1.7em; margin: 0.83em 0; }
.jp-RenderedHTMLCommon table { border-collapse: collapse; border-spacing: 0; font-size: 12px; }
.jp-RenderedHTMLCommon th, .jp-RenderedHTMLCommon td { padding: 0.5em; text-align: right; border: none; }
.jp-RenderedHTMLCommon tbody tr:nth-child(odd) { background: #f5f5f5; }
.jp-RenderedHTMLCommon img, .jp-RenderedImage img { max-width: 100%; }
a.anchor-link { padding: 0 4px; text-decoration: none; visibility: hidden; }
h1:hover a.anchor-link, h2:hover a.anchor-link, h3:hover a.anchor-link,
h4:hover a.anchor-link, h5:hover a.anchor-link, h6:hover a.anchor-link { visibility: visible; }
.jp-InputPrompt, .jp-OutputPrompt { flex: 0 0 64px; font-family: monospace; font-size: 13px;
  color: #616161; text-align: right; padding: 4px; }
.jp-InputArea { display: flex; }
.jp-InputArea pre { flex: 1; background: #f5f5f5; border: 1px solid #e0e0e0; padding: 4px 8px; margin: 0; }
.jp-OutputArea-child { display: flex; }
.jp-OutputArea-output { flex: 1; overflow-x: auto; padding: 4px 0; }
.jp-RenderedText pre { margin: 0; white-space: pre-wrap; font-family: monospace; font-size: 13px; }
.jp-OutputArea-stderr { background: #fdd; }
.jp-OutputArea-error pre { color: #b71c1c; }
"#;
