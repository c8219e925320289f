//! Conversion entry points.
//!
//! [`convert_document`] is the pure core: an immutable [`Document`] in, a
//! Markdown string out, no I/O, no error outcomes, safe to call
//! concurrently. [`convert`] wraps it with the collaborators — identifier
//! resolution, session resolution, and the API fetch — and is where every
//! fallible step lives.

use crate::config::ConversionConfig;
use crate::error::Gdoc2MdError;
use crate::model::Document;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{assemble, fetch, input};
use crate::session::resolve_session;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a document structure to Markdown.
///
/// The pure, total core: never fails on a structurally valid document.
/// Missing footnote links, styles, or fields degrade gracefully rather
/// than erroring.
pub fn convert_document(doc: &Document) -> String {
    assemble::assemble(doc).markdown
}

/// Fetch a document and convert it to Markdown.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input_str` — Bare document ID or a `docs.google.com/document/d/…` URL
/// * `config` — Conversion configuration
///
/// # Errors
/// Returns `Err(Gdoc2MdError)` for collaborator failures only:
/// - Unparseable document identifier
/// - No access token configured
/// - Fetch failures (404 / 403 / 401, timeout, transport, malformed body)
///
/// The conversion itself cannot fail.
pub async fn convert(
    input_str: impl AsRef<str>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Gdoc2MdError> {
    let total_start = Instant::now();
    let input_str = input_str.as_ref();
    info!("Starting conversion: {}", input_str);

    // ── Step 1: Resolve the document ID ──────────────────────────────────
    let document_id = input::resolve_document_id(input_str)?;

    // ── Step 2: Resolve the session ──────────────────────────────────────
    let session = resolve_session(config)?;

    // ── Step 3: Fetch the document ───────────────────────────────────────
    let fetch_start = Instant::now();
    let document = fetch::fetch_document(&document_id, &session, config).await?;
    let fetch_duration_ms = fetch_start.elapsed().as_millis() as u64;
    info!(
        "Fetched '{}' in {}ms",
        document.title.as_deref().unwrap_or("(untitled)"),
        fetch_duration_ms
    );

    // ── Step 4: Convert ──────────────────────────────────────────────────
    let convert_start = Instant::now();
    let assembled = assemble::assemble(&document);
    let convert_duration_ms = convert_start.elapsed().as_millis() as u64;
    debug!(
        "Converted {} of {} body blocks, linked {}/{} footnotes",
        assembled.rendered_blocks,
        assembled.body_blocks,
        assembled.footnotes_linked,
        assembled.footnotes_total
    );

    // ── Step 5: Optional front-matter ────────────────────────────────────
    let markdown = if config.include_metadata {
        let mut with_meta =
            format_yaml_front_matter(document.title.as_deref(), &document_id);
        with_meta.push_str(&assembled.markdown);
        with_meta
    } else {
        assembled.markdown.clone()
    };

    let stats = ConversionStats {
        body_blocks: assembled.body_blocks,
        rendered_blocks: assembled.rendered_blocks,
        footnotes_total: assembled.footnotes_total,
        footnotes_linked: assembled.footnotes_linked,
        stopped_at_references: assembled.stopped_at_references,
        fetch_duration_ms,
        convert_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {} blocks, {}ms total",
        stats.rendered_blocks, stats.total_duration_ms
    );

    Ok(ConversionOutput {
        document_id,
        title: document.title.clone(),
        markdown,
        stats,
    })
}

/// Fetch, convert, and write the Markdown directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub async fn convert_to_file(
    input_str: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Gdoc2MdError> {
    let output = convert(input_str, config).await?;
    write_atomic(output_path.as_ref(), &output.markdown).await?;
    Ok(output.stats)
}

/// Write `contents` to `path` via a temp file and rename, so readers never
/// observe a partially written file.
async fn write_atomic(path: &Path, contents: &str) -> Result<(), Gdoc2MdError> {
    let write_err = |e: std::io::Error| Gdoc2MdError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }
    }

    let tmp_path = path.with_extension("md.tmp");
    tokio::fs::write(&tmp_path, contents).await.map_err(write_err)?;
    tokio::fs::rename(&tmp_path, path).await.map_err(write_err)?;

    Ok(())
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(
    input_str: impl AsRef<str>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Gdoc2MdError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Gdoc2MdError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(convert(input_str, config))
}

/// Format document metadata as YAML front matter.
fn format_yaml_front_matter(title: Option<&str>, document_id: &str) -> String {
    let mut yaml = String::from("---\n");
    if let Some(t) = title {
        yaml.push_str(&format!("title: \"{}\"\n", t.replace('"', "\\\"")));
    }
    yaml.push_str(&format!(
        "source: \"https://docs.google.com/document/d/{}\"\n",
        document_id
    ));
    yaml.push_str("---\n\n");
    yaml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_contains_title_and_source() {
        let yaml = format_yaml_front_matter(Some("My Report"), "abc123");
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"My Report\"\n"));
        assert!(yaml.contains("source: \"https://docs.google.com/document/d/abc123\"\n"));
        assert!(yaml.ends_with("---\n\n"));
    }

    #[test]
    fn front_matter_escapes_quotes_in_title() {
        let yaml = format_yaml_front_matter(Some("A \"quoted\" title"), "id");
        assert!(yaml.contains("title: \"A \\\"quoted\\\" title\""));
    }

    #[test]
    fn convert_document_is_infallible_on_empty_input() {
        assert_eq!(convert_document(&Document::default()), "");
    }

    #[tokio::test]
    async fn write_atomic_creates_parents_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.md");

        write_atomic(&path, "# Title\n").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Title\n");
        assert!(!path.with_extension("md.tmp").exists());
    }
}
