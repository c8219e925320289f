//! Pipeline stages for Docs-to-Markdown conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable; everything after
//! [`fetch`] is pure string/structure work with no I/O.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ fetch ──▶ links ──▶ render ──▶ assemble ──▶ latex
//! (ID/URL)  (Docs API) (index)  (per ¶)    (document)   (escape)
//! ```
//!
//! 1. [`input`]    — normalise a bare document ID or docs.google.com URL
//! 2. [`fetch`]    — GET the document JSON; the only stage with network I/O
//! 3. [`links`]    — build the footnote-ID → URL index (redirect unwrapping)
//! 4. [`cite`]     — the citation-linking heuristic used per footnote marker
//! 5. [`render`]   — fold one paragraph's inline elements into a Markdown block
//! 6. [`assemble`] — walk the body, infer structural breaks, normalise whitespace
//! 7. [`latex`]    — escape backslashes/underscores inside detected math spans

pub mod assemble;
pub mod cite;
pub mod fetch;
pub mod input;
pub mod latex;
pub mod links;
pub mod render;
