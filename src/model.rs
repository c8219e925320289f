//! Typed model of the Google Docs API `documents.get` response.
//!
//! Only the fields the converter actually reads are modelled; everything
//! else in the (very large) API response is silently ignored by serde.
//! Every field is optional or defaulted because the API omits empty
//! substructures rather than sending them as `null` — a paragraph with no
//! style simply has no `paragraphStyle` key. The converter must stay total
//! over any structurally valid response, so "missing" is always a legal
//! state here, never an error.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Root of a `documents.get` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document title as shown in the Drive UI.
    #[serde(default)]
    pub title: Option<String>,

    /// Main body content.
    #[serde(default)]
    pub body: Body,

    /// Footnote definitions, keyed by footnote ID (e.g. `"kix.abc123"`).
    ///
    /// `BTreeMap` keeps iteration deterministic, which keeps test output
    /// and log lines stable across runs.
    #[serde(default)]
    pub footnotes: BTreeMap<String, Footnote>,
}

/// Body of the document: an ordered list of structural elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// One block-level element of the body or of a footnote.
///
/// The API distinguishes paragraphs, tables, section breaks and tables of
/// contents. Only paragraphs are converted; the other variants stay
/// unmodelled and deserialise to an element with `paragraph: None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    #[serde(default)]
    pub paragraph: Option<Paragraph>,
}

/// A paragraph: ordered inline elements plus a named style.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,

    #[serde(default)]
    pub paragraph_style: Option<ParagraphStyle>,
}

impl Paragraph {
    /// The paragraph's named style, parsed to the tagged enum.
    /// Missing style means `NORMAL_TEXT`.
    pub fn named_style(&self) -> NamedStyle {
        self.paragraph_style
            .as_ref()
            .and_then(|s| s.named_style_type.as_deref())
            .map(NamedStyle::parse)
            .unwrap_or(NamedStyle::Normal)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(default)]
    pub named_style_type: Option<String>,
}

/// One inline element: either a text run or a footnote reference.
///
/// The API models this as a struct with mutually exclusive optional
/// fields rather than a tagged union, and so do we — an element carrying
/// neither (an inline image, a page break) is simply skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    #[serde(default)]
    pub text_run: Option<TextRun>,

    #[serde(default)]
    pub footnote_reference: Option<FootnoteReference>,
}

/// A run of literal text with an optional style.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub text_style: Option<TextStyle>,
}

impl TextRun {
    /// The hyperlink target attached to this run's style, if any.
    pub fn link_url(&self) -> Option<&str> {
        self.text_style
            .as_ref()
            .and_then(|s| s.link.as_ref())
            .and_then(|l| l.url.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default)]
    pub url: Option<String>,
}

/// A reference from body text to a footnote definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootnoteReference {
    #[serde(default)]
    pub footnote_id: Option<String>,

    /// Display number as rendered in the doc ("1", "2", …). The API sends
    /// this as a string.
    #[serde(default)]
    pub footnote_number: Option<String>,
}

/// A footnote definition: block content structurally identical to the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footnote {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

// ── Named styles ─────────────────────────────────────────────────────────

/// The paragraph styles the converter distinguishes.
///
/// The API sends free-form strings (`"TITLE"`, `"HEADING_3"`,
/// `"NORMAL_TEXT"`, `"SUBTITLE"`, …). Parsing them once at the model
/// boundary means the rendering code matches on a closed enum instead of
/// re-splitting strings per paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedStyle {
    /// `TITLE` — renders as a level-1 heading.
    Title,
    /// `HEADING_n` with a well-formed numeric suffix.
    Heading(u8),
    /// Everything else, including `NORMAL_TEXT`, `SUBTITLE`, and any
    /// `HEADING_*` whose suffix fails to parse — rendered unprefixed.
    Normal,
}

impl NamedStyle {
    /// Parse a `namedStyleType` string.
    pub fn parse(s: &str) -> Self {
        if s == "TITLE" {
            return NamedStyle::Title;
        }
        if let Some(suffix) = s.strip_prefix("HEADING_") {
            if let Ok(level) = suffix.parse::<u8>() {
                return NamedStyle::Heading(level);
            }
        }
        NamedStyle::Normal
    }

    /// True for the styles that mark the document's main title block
    /// (`TITLE` or `HEADING_1`) — the trigger for the one-shot `---`
    /// separator in the assembler.
    pub fn is_title_block(self) -> bool {
        matches!(self, NamedStyle::Title | NamedStyle::Heading(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_styles() {
        assert_eq!(NamedStyle::parse("TITLE"), NamedStyle::Title);
        assert_eq!(NamedStyle::parse("HEADING_1"), NamedStyle::Heading(1));
        assert_eq!(NamedStyle::parse("HEADING_6"), NamedStyle::Heading(6));
        assert_eq!(NamedStyle::parse("NORMAL_TEXT"), NamedStyle::Normal);
        assert_eq!(NamedStyle::parse("SUBTITLE"), NamedStyle::Normal);
    }

    #[test]
    fn malformed_heading_suffix_falls_back_to_normal() {
        assert_eq!(NamedStyle::parse("HEADING_"), NamedStyle::Normal);
        assert_eq!(NamedStyle::parse("HEADING_X"), NamedStyle::Normal);
        assert_eq!(NamedStyle::parse("HEADING"), NamedStyle::Normal);
    }

    #[test]
    fn title_block_detection() {
        assert!(NamedStyle::Title.is_title_block());
        assert!(NamedStyle::Heading(1).is_title_block());
        assert!(!NamedStyle::Heading(2).is_title_block());
        assert!(!NamedStyle::Normal.is_title_block());
    }

    #[test]
    fn document_deserialises_from_api_shape() {
        let json = serde_json::json!({
            "title": "Quarterly Report",
            "revisionId": "ignored-field",
            "body": {
                "content": [
                    { "sectionBreak": {} },
                    {
                        "paragraph": {
                            "elements": [
                                { "textRun": { "content": "Hello ", "textStyle": {} } },
                                { "footnoteReference": {
                                    "footnoteId": "kix.f1", "footnoteNumber": "1"
                                } }
                            ],
                            "paragraphStyle": { "namedStyleType": "HEADING_2" }
                        }
                    }
                ]
            },
            "footnotes": {
                "kix.f1": {
                    "content": [{
                        "paragraph": {
                            "elements": [{
                                "textRun": {
                                    "content": "source",
                                    "textStyle": { "link": { "url": "https://example.com" } }
                                }
                            }]
                        }
                    }]
                }
            }
        });

        let doc: Document = serde_json::from_value(json).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Quarterly Report"));
        assert_eq!(doc.body.content.len(), 2);
        assert!(doc.body.content[0].paragraph.is_none());

        let para = doc.body.content[1].paragraph.as_ref().unwrap();
        assert_eq!(para.named_style(), NamedStyle::Heading(2));
        assert_eq!(para.elements.len(), 2);

        let footnote = &doc.footnotes["kix.f1"];
        let run = footnote.content[0].paragraph.as_ref().unwrap().elements[0]
            .text_run
            .as_ref()
            .unwrap();
        assert_eq!(run.link_url(), Some("https://example.com"));
    }

    #[test]
    fn empty_object_is_a_valid_document() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.title.is_none());
        assert!(doc.body.content.is_empty());
        assert!(doc.footnotes.is_empty());
    }
}
