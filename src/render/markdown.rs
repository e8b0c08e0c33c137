//! Markdown to HTML conversion for markdown cells and outputs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::model::{mime_text, Attachments};

const ATTACHMENT_PREFIX: &str = "attachment:";

/// Convert markdown to an HTML fragment.
///
/// Headings get an `id` and a `¶` anchor link. Image references of the
/// form `attachment:<name>` are replaced by data URIs from `attachments`.
/// `$...$` and `$$...$$` math is kept verbatim inside `\(...\)` and
/// `\[...\]` delimiters for MathJax.
pub fn markdown_to_html(text: &str, attachments: Option<&Attachments>) -> String {
    let parser = Parser::new_ext(text, markdown_options());
    let events: Vec<Event<'_>> = parser
        .map(protect_math)
        .map(|event| resolve_attachment(event, attachments))
        .collect();

    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, with_heading_anchors(events).into_iter());
    output
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_MATH
}

/// Turn math events back into delimited text so markdown never rewrites it.
fn protect_math(event: Event<'_>) -> Event<'_> {
    match event {
        Event::InlineMath(tex) => Event::Text(CowStr::from(format!("\\({}\\)", tex))),
        Event::DisplayMath(tex) => Event::Text(CowStr::from(format!("\\[{}\\]", tex))),
        other => other,
    }
}

/// Anchor id for a heading: its text with spaces replaced by `-`.
pub fn heading_slug(text: &str) -> String {
    text.trim().replace(' ', "-")
}

fn with_heading_anchors(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut output = Vec::with_capacity(events.len());
    let mut heading: Option<(usize, String)> = None;

    for event in events {
        if let Some((_, text)) = heading.as_mut() {
            if let Event::Text(t) | Event::Code(t) = &event {
                text.push_str(t);
            }
        }

        match event {
            Event::Start(Tag::Heading { .. }) => {
                heading = Some((output.len(), String::new()));
                output.push(event);
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((start, text)) = heading.take() {
                    let slug = heading_slug(&text);
                    if let Event::Start(Tag::Heading { id, .. }) = &mut output[start] {
                        if id.is_none() {
                            *id = Some(CowStr::from(slug.clone()));
                        }
                    }
                    output.push(Event::Html(CowStr::from(format!(
                        "<a class=\"anchor-link\" href=\"#{}\">\u{b6}</a>",
                        html_escape::encode_double_quoted_attribute(&slug)
                    ))));
                }
                output.push(event);
            }
            other => output.push(other),
        }
    }
    output
}

fn resolve_attachment<'a>(event: Event<'a>, attachments: Option<&Attachments>) -> Event<'a> {
    let Event::Start(Tag::Image {
        link_type,
        dest_url,
        title,
        id,
    }) = event
    else {
        return event;
    };

    let resolved = dest_url
        .strip_prefix(ATTACHMENT_PREFIX)
        .and_then(|name| {
            let uri = attachments
                .and_then(|a| a.get(name))
                .and_then(|bundle| bundle.iter().find(|(mime, _)| mime.starts_with("image/")))
                .and_then(|(mime, value)| mime_text(value).map(|data| data_uri(mime, &data)));
            if uri.is_none() {
                log::warn!("Markdown references missing attachment {:?}", name);
            }
            uri
        });

    Event::Start(Tag::Image {
        link_type,
        dest_url: resolved.map(CowStr::from).unwrap_or(dest_url),
        title,
        id,
    })
}

/// Build a `data:` URI for base64 image data (SVG text is encoded here).
pub fn data_uri(mime: &str, data: &str) -> String {
    if mime == "image/svg+xml" && data.trim_start().starts_with('<') {
        format!("data:{};base64,{}", mime, STANDARD.encode(data.as_bytes()))
    } else {
        let compact: String = data.chars().filter(|c| !c.is_whitespace()).collect();
        format!("data:{};base64,{}", mime, compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_markdown() {
        let html = markdown_to_html("Some **bold** text", None);
        assert_eq!(html, "<p>Some <strong>bold</strong> text</p>\n");
    }

    #[test]
    fn test_heading_anchor() {
        let html = markdown_to_html("# Project Report", None);
        assert!(html.contains("<h1 id=\"Project-Report\">"));
        assert!(html.contains("<a class=\"anchor-link\" href=\"#Project-Report\">\u{b6}</a></h1>"));
    }

    #[test]
    fn test_heading_with_code_span() {
        let html = markdown_to_html("## Using `merge`", None);
        assert!(html.contains("id=\"Using-merge\""));
    }

    #[test]
    fn test_tables_enabled() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |", None);
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_attachment_resolved() {
        let mut attachments = Attachments::new();
        attachments.insert(
            "plot.png".into(),
            [("image/png".to_string(), json!("iVBOR\nw0K"))]
                .into_iter()
                .collect(),
        );
        let html = markdown_to_html("![plot](attachment:plot.png)", Some(&attachments));
        assert!(html.contains("src=\"data:image/png;base64,iVBORw0K\""));
    }

    #[test]
    fn test_missing_attachment_left_alone() {
        let html = markdown_to_html("![x](attachment:nope.png)", None);
        assert!(html.contains("src=\"attachment:nope.png\""));
    }

    #[test]
    fn test_inline_math_kept_verbatim() {
        let html = markdown_to_html(r"Sets $\{x\}$ and products $a*b*c$.", None);
        assert_eq!(
            html,
            "<p>Sets \\(\\{x\\}\\) and products \\(a*b*c\\).</p>\n"
        );
    }

    #[test]
    fn test_display_math_kept_verbatim() {
        let html = markdown_to_html(
            r"$$\{x \mid x > 0\}$$ and $$\begin{matrix} 1 \\ 2 \end{matrix}$$",
            None,
        );
        assert!(html.contains(r"\[\{x \mid x &gt; 0\}\]"));
        assert!(html.contains(r"\[\begin{matrix} 1 \\ 2 \end{matrix}\]"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_svg_data_uri() {
        let uri = data_uri("image/svg+xml", "<svg/>");
        assert_eq!(uri, "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
