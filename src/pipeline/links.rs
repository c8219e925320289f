//! Footnote link extraction: URL normalisation and the footnote link index.
//!
//! ## Why normalise URLs at all?
//!
//! Even through the API, Google frequently wraps external hyperlink targets
//! in its redirect service: `https://www.google.com/url?q=<real-target>&…`.
//! Emitting those verbatim produces Markdown links that bounce through a
//! tracking redirect and break when the wrapper's signature expires. The
//! normaliser unwraps the `q` query parameter (percent-decoded) and leaves
//! every other URL untouched.
//!
//! ## The footnote link index
//!
//! Research reports exported from Docs cite sources as footnotes whose
//! definition is a single linked text run. [`extract_footnote_links`] scans
//! every footnote definition once, up front, and maps footnote ID → the
//! first linked URL found inside it. The index is built once per conversion
//! and shared read-only by every paragraph render.

use crate::model::Document;
use std::collections::HashMap;
use url::Url;

/// Footnote ID → normalised target URL. Footnotes whose definition carries
/// no hyperlink are simply absent.
pub type FootnoteLinks = HashMap<String, String>;

/// Unwrap a Google redirect URL, returning the decoded `q` parameter.
///
/// Any URL that is not a `google.com/url?q=` wrapper (including empty
/// strings and unparseable input) is returned unchanged.
pub fn normalize_url(url: &str) -> String {
    if url.contains("google.com/url?q=") {
        if let Ok(parsed) = Url::parse(url) {
            if let Some((_, target)) = parsed.query_pairs().find(|(k, _)| k == "q") {
                return target.into_owned();
            }
        }
    }
    url.to_string()
}

/// Build the footnote link index for a document.
///
/// For each footnote: scan its content blocks in order, and within each
/// paragraph its inline elements in order; the first text run carrying a
/// link style decides that footnote's URL. Expressed as an early-exit
/// search over the nested sequence — one link per footnote, by design.
pub fn extract_footnote_links(doc: &Document) -> FootnoteLinks {
    doc.footnotes
        .iter()
        .filter_map(|(id, footnote)| {
            let url = footnote
                .content
                .iter()
                .filter_map(|block| block.paragraph.as_ref())
                .flat_map(|p| p.elements.iter())
                .filter_map(|el| el.text_run.as_ref())
                .find_map(|run| run.link_url())?;
            Some((id.clone(), normalize_url(url)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    #[test]
    fn plain_url_passes_through() {
        assert_eq!(
            normalize_url("https://example.com/paper"),
            "https://example.com/paper"
        );
    }

    #[test]
    fn empty_url_passes_through() {
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn redirect_wrapper_is_unwrapped_and_decoded() {
        assert_eq!(
            normalize_url("https://www.google.com/url?q=https%3A%2F%2Fexample.com%2Fx"),
            "https://example.com/x"
        );
    }

    #[test]
    fn redirect_wrapper_with_extra_params() {
        assert_eq!(
            normalize_url(
                "https://www.google.com/url?q=https%3A%2F%2Fexample.com%2Fx&sa=D&ust=123"
            ),
            "https://example.com/x"
        );
    }

    #[test]
    fn wrapper_without_q_param_passes_through() {
        let url = "https://www.google.com/url?sa=D";
        assert_eq!(normalize_url(url), url);
    }

    fn doc_with_footnotes(footnotes: serde_json::Value) -> Document {
        serde_json::from_value(serde_json::json!({ "footnotes": footnotes })).unwrap()
    }

    #[test]
    fn first_linked_run_wins() {
        let doc = doc_with_footnotes(serde_json::json!({
            "kix.a": {
                "content": [
                    { "paragraph": { "elements": [
                        { "textRun": { "content": "See " } },
                        { "textRun": {
                            "content": "first",
                            "textStyle": { "link": { "url": "https://first.test" } }
                        } },
                        { "textRun": {
                            "content": "second",
                            "textStyle": { "link": { "url": "https://second.test" } }
                        } }
                    ] } }
                ]
            }
        }));

        let links = extract_footnote_links(&doc);
        assert_eq!(links.len(), 1);
        assert_eq!(links["kix.a"], "https://first.test");
    }

    #[test]
    fn search_stops_at_first_link_across_blocks() {
        let doc = doc_with_footnotes(serde_json::json!({
            "kix.a": {
                "content": [
                    { "paragraph": { "elements": [
                        { "textRun": {
                            "content": "primary",
                            "textStyle": { "link": { "url": "https://primary.test" } }
                        } }
                    ] } },
                    { "paragraph": { "elements": [
                        { "textRun": {
                            "content": "later",
                            "textStyle": { "link": { "url": "https://later.test" } }
                        } }
                    ] } }
                ]
            }
        }));

        assert_eq!(
            extract_footnote_links(&doc)["kix.a"],
            "https://primary.test"
        );
    }

    #[test]
    fn unlinked_footnote_is_absent_not_an_error() {
        let doc = doc_with_footnotes(serde_json::json!({
            "kix.plain": {
                "content": [
                    { "paragraph": { "elements": [
                        { "textRun": { "content": "Ibid., p. 12." } }
                    ] } }
                ]
            }
        }));

        assert!(extract_footnote_links(&doc).is_empty());
    }

    #[test]
    fn stored_urls_are_normalised() {
        let doc = doc_with_footnotes(serde_json::json!({
            "kix.w": {
                "content": [
                    { "paragraph": { "elements": [
                        { "textRun": {
                            "content": "src",
                            "textStyle": { "link": {
                                "url": "https://www.google.com/url?q=https%3A%2F%2Farxiv.org%2Fabs%2F1706.03762"
                            } }
                        } }
                    ] } }
                ]
            }
        }));

        assert_eq!(
            extract_footnote_links(&doc)["kix.w"],
            "https://arxiv.org/abs/1706.03762"
        );
    }
}
