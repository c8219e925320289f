//! # gdoc2md
//!
//! Convert Google Docs research reports to Markdown, re-attaching footnote
//! citations as inline hyperlinks.
//!
//! ## Why this crate?
//!
//! The Docs export menu produces Markdown-ish text that keeps citations as
//! dangling superscript numbers and loses every hyperlink buried in the
//! footnotes. For AI-generated research reports — where each claim carries
//! a footnoted source link — that throws away the most valuable part of
//! the document. This crate fetches the document through the Docs API,
//! resolves each footnote to its source URL, and re-attaches the link to
//! the phrase it supports, producing Markdown people can actually follow.
//!
//! ## Pipeline Overview
//!
//! ```text
//! document ID / URL
//!  │
//!  ├─ 1. Input    resolve bare ID or docs.google.com URL
//!  ├─ 2. Fetch    documents.get via an authorized session (only I/O stage)
//!  ├─ 3. Links    footnote ID → URL index, redirect wrappers unwrapped
//!  ├─ 4. Render   per paragraph: citation heuristic + style → Markdown block
//!  ├─ 5. Assemble title separator, stop heading, whitespace normalisation
//!  └─ 6. LaTeX    escape math spans for safe Markdown embedding
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gdoc2md::{convert, ConversionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Token auto-detected from GDOC2MD_ACCESS_TOKEN / GOOGLE_ACCESS_TOKEN
//!     let config = ConversionConfig::default();
//!     let output = convert("1fyO2F0M6fPPsKrEsI13paQOVWI655NEzsLTOhQd5kl4", &config).await?;
//!     println!("{}", output.markdown);
//!     Ok(())
//! }
//! ```
//!
//! Already have the document JSON? The pure core needs no token at all:
//!
//! ```rust
//! use gdoc2md::Document;
//!
//! let doc: Document = serde_json::from_str("{}").unwrap();
//! let markdown = gdoc2md::convert_document(&doc);
//! assert!(markdown.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `gdoc2md` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! gdoc2md = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod session;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_API_BASE_URL};
pub use convert::{convert, convert_document, convert_sync, convert_to_file};
pub use error::Gdoc2MdError;
pub use model::{Document, NamedStyle};
pub use output::{ConversionOutput, ConversionStats};
pub use session::Session;
