//! Document assembly: ordered paragraph walk plus whole-text cleanup.
//!
//! ## Structural inference
//!
//! The Docs API does not expose horizontal rules, so two structural breaks
//! are inferred from signals that are reliable in practice for research
//! reports:
//!
//! - a `---` separator after the first `TITLE`/`HEADING_1` block (the
//!   document's main title), emitted exactly once;
//! - a `---` separator before the literal phrase "End of Report".
//!
//! These are heuristic literal-phrase rules over the tagged style enum and
//! the assembled text; no deeper structure recovery is attempted.
//!
//! ## Cleanup order
//!
//! The whole-text passes must run in this order: trim first, insert the
//! end-of-report rule (which adds newlines), collapse newline runs so the
//! insertion can't leave a triple break, and escape LaTeX last so the
//! earlier passes never see doubled backslashes.

use crate::model::Document;
use crate::pipeline::latex::escape_latex;
use crate::pipeline::links::extract_footnote_links;
use crate::pipeline::render::render_paragraph;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_END_OF_REPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)End of Report").unwrap());
static RE_EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Result of assembling a document, with counters for reporting.
#[derive(Debug, Clone)]
pub struct Assembled {
    /// The final Markdown text.
    pub markdown: String,
    /// Paragraph blocks present in the body (non-paragraph blocks such as
    /// tables are not counted — they are not converted).
    pub body_blocks: usize,
    /// Paragraph blocks that produced output.
    pub rendered_blocks: usize,
    /// Footnote definitions in the document.
    pub footnotes_total: usize,
    /// Footnotes that resolved to a hyperlink.
    pub footnotes_linked: usize,
    /// True when a stop heading truncated the walk.
    pub stopped_at_references: bool,
}

/// Convert a document to Markdown.
///
/// Pure and total: any structurally valid [`Document`] converts without
/// error, degrading field-by-field (missing links become `^N` markers,
/// missing styles render plain).
pub fn assemble(doc: &Document) -> Assembled {
    let links = extract_footnote_links(doc);

    let mut markdown = String::new();
    let mut title_separator_added = false;
    let mut body_blocks = 0usize;
    let mut rendered_blocks = 0usize;
    let mut stopped = false;

    for element in &doc.body.content {
        let Some(paragraph) = &element.paragraph else {
            continue;
        };
        body_blocks += 1;

        let block = render_paragraph(paragraph, &links);

        if !block.markdown.is_empty() {
            rendered_blocks += 1;
            markdown.push_str(&block.markdown);

            // The first title-level block ends the document's masthead.
            if !title_separator_added && block.style.is_title_block() {
                markdown.push_str("---\n\n");
                title_separator_added = true;
            }
        }

        if block.stop {
            stopped = true;
            break;
        }
    }

    let markdown = markdown.trim().to_string();
    let markdown = RE_END_OF_REPORT.replace_all(&markdown, "---\n\n$0");
    let markdown = RE_EXCESS_NEWLINES.replace_all(&markdown, "\n\n");
    let markdown = escape_latex(&markdown);

    Assembled {
        markdown,
        body_blocks,
        rendered_blocks,
        footnotes_total: doc.footnotes.len(),
        footnotes_linked: links.len(),
        stopped_at_references: stopped,
    }
}
