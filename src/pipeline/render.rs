//! Paragraph rendering: inline elements → one Markdown block.
//!
//! Walks a paragraph's inline elements left to right, buffering text runs
//! so that when a footnote marker appears the renderer knows exactly what
//! text preceded it. Linked footnotes rewrite that buffer via the citation
//! heuristic; unlinked ones fall back to a `^N` superscript marker — a
//! footnote is never silently dropped. The buffer is an explicit
//! accumulator threaded through the loop; nothing here touches shared
//! state.

use crate::model::{NamedStyle, Paragraph};
use crate::pipeline::cite::link_citation;
use crate::pipeline::links::FootnoteLinks;
use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-line, case-insensitive match for the headings that terminate
/// conversion. Everything from the matching paragraph onward is the
/// citation list, which the inline links have already replaced.
static RE_STOP_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(Works cited|References|Bibliography)\s*$").unwrap());

/// One rendered paragraph.
#[derive(Debug, Clone)]
pub struct RenderedBlock {
    /// Markdown fragment, blank-line terminated; empty for empty paragraphs
    /// and for the stop heading itself.
    pub markdown: String,
    /// The paragraph's resolved named style.
    pub style: NamedStyle,
    /// True when this paragraph is a stop heading: the assembler must
    /// discard it and everything after it.
    pub stop: bool,
}

/// Render one paragraph against the footnote link index.
pub fn render_paragraph(paragraph: &Paragraph, links: &FootnoteLinks) -> RenderedBlock {
    let mut content = String::new();
    let mut buffer = String::new();

    for element in &paragraph.elements {
        if let Some(run) = &element.text_run {
            // Accumulate all text, including interior whitespace, but skip
            // the paragraph's final lone newline run.
            if let Some(text) = run.content.as_deref() {
                if text != "\n" {
                    buffer.push_str(text);
                }
            }
        } else if let Some(footnote) = &element.footnote_reference {
            let url = footnote
                .footnote_id
                .as_deref()
                .and_then(|id| links.get(id));
            match url {
                Some(url) => content.push_str(&link_citation(&buffer, url)),
                None => {
                    // No resolved link: keep the buffer and mark the spot
                    // with the footnote's display number.
                    content.push_str(&buffer);
                    content.push('^');
                    content.push_str(footnote.footnote_number.as_deref().unwrap_or(""));
                }
            }
            buffer.clear();
        }
    }
    content.push_str(&buffer);

    let style = paragraph.named_style();
    let text = content.trim();

    if RE_STOP_HEADING.is_match(text) {
        return RenderedBlock {
            markdown: String::new(),
            style,
            stop: true,
        };
    }

    if text.is_empty() {
        return RenderedBlock {
            markdown: String::new(),
            style,
            stop: false,
        };
    }

    let markdown = match style {
        NamedStyle::Title => format!("# {text}\n\n"),
        NamedStyle::Heading(level) => {
            let prefix = "#".repeat(level.max(1) as usize);
            format!("{prefix} {text}\n\n")
        }
        NamedStyle::Normal => format!("{text}\n\n"),
    };

    RenderedBlock {
        markdown,
        style,
        stop: false,
    }
}
