//! The citation linking heuristic.
//!
//! ## The problem
//!
//! A Docs research report cites sources as superscript footnote markers.
//! Converted naively, the Markdown loses the association between a claim
//! and its source: the footnote content (a bare URL) ends up far from the
//! sentence it supports. Readers of Markdown expect inline links instead.
//!
//! ## The rule
//!
//! Given the plain text accumulated immediately before a footnote marker
//! and that footnote's resolved URL, wrap the *phrase after the last comma
//! of the last sentence* as the link anchor:
//!
//! ```text
//! "Early results suggest improvement, particularly in recall"
//!                                     └──────── linked ──────┘
//! ```
//!
//! Sentence and clause boundaries are the ASCII delimiters `". "` and
//! `", "` — a deliberate, locale-blind approximation that works well on
//! the prose these reports contain. Trailing punctuation directly before
//! the marker is preserved *after* the link so `…claim.¹` becomes
//! `…[claim](url).`
//!
//! [`link_citation`] is a pure function: no state, no I/O, same inputs
//! always produce the same output.

/// Sentence delimiter: period followed by space.
const SENTENCE_DELIM: &str = ". ";
/// Clause delimiter: comma followed by space.
const CLAUSE_DELIM: &str = ", ";

/// Rewrite `text_before` (the buffer preceding a footnote marker) so that
/// its trailing phrase becomes a Markdown link to `url`.
///
/// Returns the replacement for the whole buffer. An empty (or all-
/// whitespace) buffer yields an empty string — there is nothing to anchor,
/// so no link is emitted.
///
/// Degenerate buffers that still contain text but no sentence after the
/// `". "` split fall back to wrapping the full remaining text as the link;
/// only a buffer reduced to nothing at all collapses to its detached
/// punctuation.
pub fn link_citation(text_before: &str, url: &str) -> String {
    let mut text = text_before.trim();
    if text.is_empty() {
        return String::new();
    }

    // Detach a single trailing `. , ; :` — it belongs after the link.
    let mut trailing_punctuation = "";
    if let Some(last) = text.chars().last() {
        if matches!(last, '.' | ',' | ';' | ':') {
            trailing_punctuation = &text[text.len() - last.len_utf8()..];
            text = text[..text.len() - last.len_utf8()].trim_end();
        }
    }

    // Split off the last sentence; the `". "` stays with the prefix.
    let (preceding_sentences, last_sentence) = match text.rfind(SENTENCE_DELIM) {
        Some(idx) => {
            let split = idx + SENTENCE_DELIM.len();
            (&text[..split], text[split..].trim())
        }
        None => ("", text),
    };

    if last_sentence.is_empty() {
        if text.is_empty() {
            // Buffer was only punctuation.
            return trailing_punctuation.to_string();
        }
        return format!("[{text}]({url}){trailing_punctuation}");
    }

    // Split the last sentence at its last `", "`; the phrase after it is
    // the anchor, everything before stays verbatim.
    match last_sentence.rfind(CLAUSE_DELIM) {
        Some(idx) => {
            let split = idx + CLAUSE_DELIM.len();
            let preceding_phrase = &last_sentence[..split];
            let linked_phrase = last_sentence[split..].trim();
            format!(
                "{preceding_sentences}{preceding_phrase}[{linked_phrase}]({url}){trailing_punctuation}"
            )
        }
        None => {
            format!("{preceding_sentences}[{last_sentence}]({url}){trailing_punctuation}")
        }
    }
}
