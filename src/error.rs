//! Error types for the gdoc2md library.
//!
//! There is exactly one error enum because the conversion core itself is
//! total: a structurally valid [`crate::model::Document`] always converts,
//! degrading gracefully on missing substructures (absent footnote link →
//! `^N` marker, absent style → plain paragraph, malformed heading suffix →
//! unprefixed text). Every variant here therefore describes a failure of
//! the *collaborators* — identifier parsing, authorization, the network
//! fetch, or writing the output file — and each carries enough context to
//! tell the user what to do next.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the gdoc2md library.
#[derive(Debug, Error)]
pub enum Gdoc2MdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input is neither a plausible document ID nor a Docs URL.
    #[error("Invalid document identifier '{input}'\nPass a bare document ID or a https://docs.google.com/document/d/… URL.")]
    InvalidDocumentId { input: String },

    // ── Auth errors ───────────────────────────────────────────────────────
    /// No access token could be resolved from config or environment.
    #[error(
        "No access token configured.\n{hint}"
    )]
    AuthNotConfigured { hint: String },

    // ── Fetch errors ──────────────────────────────────────────────────────
    /// The API returned 404 for this document ID.
    #[error("Document not found: '{document_id}'\nCheck the ID and ensure the document has not been deleted.")]
    DocumentNotFound { document_id: String },

    /// The API returned 403.
    #[error("Permission denied for document '{document_id}'\nEnsure the authorized account has at least viewer access.")]
    PermissionDenied { document_id: String },

    /// The API returned 401 — the token is invalid or expired.
    #[error("Unauthorized fetching document '{document_id}'\nThe access token is invalid or expired; obtain a fresh one.")]
    Unauthorized { document_id: String },

    /// The fetch exceeded the configured timeout.
    #[error("Fetch timed out after {secs}s for document '{document_id}'\nIncrease --timeout or check your connection.")]
    FetchTimeout { document_id: String, secs: u64 },

    /// Any other transport or HTTP failure.
    #[error("Failed to fetch document '{document_id}': {reason}")]
    FetchFailed { document_id: String, reason: String },

    /// The response body was not a valid document structure.
    #[error("Malformed API response for document '{document_id}': {detail}")]
    MalformedResponse { document_id: String, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
