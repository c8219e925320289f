//! Output types: the assembled Markdown plus conversion statistics.

use serde::Serialize;

/// The complete result of a fetch-and-convert run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    /// The bare document ID that was fetched.
    pub document_id: String,

    /// Document title as reported by the API.
    pub title: Option<String>,

    /// The final Markdown text.
    pub markdown: String,

    /// Counters and timings for the run.
    pub stats: ConversionStats,
}

/// Statistics for a conversion run.
///
/// Serialisable so `--json` output can carry them alongside the Markdown.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionStats {
    /// Paragraph blocks in the document body.
    pub body_blocks: usize,
    /// Paragraph blocks that produced Markdown output.
    pub rendered_blocks: usize,
    /// Footnote definitions in the document.
    pub footnotes_total: usize,
    /// Footnotes that resolved to an inline hyperlink.
    pub footnotes_linked: usize,
    /// True when a "Works cited"/"References"/"Bibliography" heading
    /// truncated the conversion.
    pub stopped_at_references: bool,
    /// Wall-clock time of the API fetch.
    pub fetch_duration_ms: u64,
    /// Wall-clock time of the document-to-Markdown conversion.
    pub convert_duration_ms: u64,
    /// Total wall-clock time including fetch.
    pub total_duration_ms: u64,
}
