//! Input resolution: normalise a user-supplied identifier to a document ID.
//!
//! People paste whatever their browser shows, which is rarely a bare ID:
//! `https://docs.google.com/document/d/<id>/edit?usp=sharing`. Accepting
//! both forms here keeps the rest of the pipeline working with plain IDs
//! only.

use crate::error::Gdoc2MdError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Path segment of a Docs URL that carries the document ID.
static RE_DOCS_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/document/(?:u/\d+/)?d/([A-Za-z0-9_-]+)").unwrap());

/// Document IDs are URL-safe base64-ish tokens; real ones are 40+ chars
/// but the API is the authority, so only the alphabet is checked here.
static RE_DOC_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Check if the input string looks like a URL.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Resolve the input string to a bare document ID.
///
/// Accepts either a bare ID or a full `docs.google.com` document URL.
pub fn resolve_document_id(input: &str) -> Result<String, Gdoc2MdError> {
    let input = input.trim();

    if is_url(input) {
        return match RE_DOCS_URL.captures(input) {
            Some(caps) => Ok(caps[1].to_string()),
            None => Err(Gdoc2MdError::InvalidDocumentId {
                input: input.to_string(),
            }),
        };
    }

    if !input.is_empty() && RE_DOC_ID.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(Gdoc2MdError::InvalidDocumentId {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://docs.google.com/document/d/abc/edit"));
        assert!(is_url("http://docs.google.com/document/d/abc"));
        assert!(!is_url("1fyO2F0M6fPPsKrEsI13paQOVWI655NEzsLTOhQd5kl4"));
        assert!(!is_url(""));
    }

    #[test]
    fn bare_id_passes_through() {
        assert_eq!(
            resolve_document_id("1fyO2F0M6fPPsKrEsI13paQOVWI655NEzsLTOhQd5kl4").unwrap(),
            "1fyO2F0M6fPPsKrEsI13paQOVWI655NEzsLTOhQd5kl4"
        );
    }

    #[test]
    fn share_url_yields_id() {
        assert_eq!(
            resolve_document_id(
                "https://docs.google.com/document/d/1fyO2F0M6fPPsKrEsI13paQOVWI655NEzsLTOhQd5kl4/edit?usp=sharing"
            )
            .unwrap(),
            "1fyO2F0M6fPPsKrEsI13paQOVWI655NEzsLTOhQd5kl4"
        );
    }

    #[test]
    fn multi_account_url_yields_id() {
        assert_eq!(
            resolve_document_id("https://docs.google.com/document/u/1/d/abc_DEF-123/edit")
                .unwrap(),
            "abc_DEF-123"
        );
    }

    #[test]
    fn non_docs_url_is_rejected() {
        assert!(matches!(
            resolve_document_id("https://example.com/report.pdf"),
            Err(Gdoc2MdError::InvalidDocumentId { .. })
        ));
    }

    #[test]
    fn garbage_input_is_rejected() {
        assert!(resolve_document_id("").is_err());
        assert!(resolve_document_id("not a doc id").is_err());
    }
}
