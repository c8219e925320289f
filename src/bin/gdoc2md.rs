//! CLI binary for gdoc2md.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use gdoc2md::{convert, convert_to_file, ConversionConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (stdout)
  gdoc2md 1fyO2F0M6fPPsKrEsI13paQOVWI655NEzsLTOhQd5kl4

  # Paste the share URL directly
  gdoc2md "https://docs.google.com/document/d/1fyO2F0M6fPPsKrEsI13paQOVWI655NEzsLTOhQd5kl4/edit?usp=sharing"

  # Convert to file
  gdoc2md <DOC_ID> -o report.md

  # YAML front-matter with title and source link
  gdoc2md --metadata <DOC_ID> -o report.md

  # JSON output with conversion stats
  gdoc2md --json <DOC_ID> > report.json

AUTHENTICATION:
  The Docs API requires an OAuth token with the documents.readonly scope.
  The simplest route with an existing Google account:

    export GDOC2MD_ACCESS_TOKEN="$(gcloud auth print-access-token \
        --scopes=https://www.googleapis.com/auth/documents.readonly)"
    gdoc2md <DOC_ID>

ENVIRONMENT VARIABLES:
  GDOC2MD_ACCESS_TOKEN    OAuth bearer token (preferred)
  GOOGLE_ACCESS_TOKEN     Fallback token variable
"#;

/// Convert Google Docs documents to Markdown with inline footnote citations.
#[derive(Parser, Debug)]
#[command(
    name = "gdoc2md",
    version,
    about = "Convert Google Docs documents to Markdown with inline footnote citations",
    long_about = "Fetch a Google Doc through the Docs API and convert it to clean Markdown. \
Footnote citations are re-attached as inline hyperlinks on the phrase they support, \
redirect-wrapped URLs are unwrapped, and LaTeX math spans are escaped for safe embedding.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Document ID or a docs.google.com/document/d/… URL.
    input: String,

    /// Write Markdown to this file instead of stdout.
    #[arg(short, long, env = "GDOC2MD_OUTPUT")]
    output: Option<PathBuf>,

    /// OAuth bearer token (documents.readonly scope).
    #[arg(long, env = "GDOC2MD_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Fetch timeout in seconds.
    #[arg(long, env = "GDOC2MD_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Override the Docs API base URL (testing / proxies).
    #[arg(long, env = "GDOC2MD_API_BASE", hide = true)]
    api_base: Option<String>,

    /// Prepend YAML front-matter with document title and source.
    #[arg(long, env = "GDOC2MD_METADATA")]
    metadata: bool,

    /// Output structured JSON (ConversionOutput) instead of Markdown.
    #[arg(long, env = "GDOC2MD_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "GDOC2MD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "GDOC2MD_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = ConversionConfig::builder()
        .fetch_timeout_secs(cli.timeout)
        .include_metadata(cli.metadata);

    if let Some(ref token) = cli.token {
        builder = builder.access_token(token.clone());
    }
    if let Some(ref base) = cli.api_base {
        builder = builder.api_base_url(base.clone());
    }

    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let stats = convert_to_file(&cli.input, output_path, &config)
            .await
            .context("Conversion failed")?;

        if !cli.quiet {
            eprintln!(
                "{}  {} blocks  {}ms  →  {}",
                green("✔"),
                stats.rendered_blocks,
                stats.total_duration_ms,
                bold(&output_path.display().to_string()),
            );
            eprintln!(
                "   {} of {} footnotes linked inline",
                dim(&stats.footnotes_linked.to_string()),
                dim(&stats.footnotes_total.to_string()),
            );
        }
    } else {
        let output = convert(&cli.input, &config)
            .await
            .context("Conversion failed")?;

        if cli.json {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            println!("{json}");
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(output.markdown.as_bytes())
                .context("Failed to write to stdout")?;
            // Ensure a trailing newline on stdout.
            if !output.markdown.ends_with('\n') {
                handle.write_all(b"\n").ok();
            }
        }

        if !cli.quiet && !cli.json {
            eprintln!(
                "   {} blocks  /  {}/{} footnotes linked  —  {}ms total",
                dim(&output.stats.rendered_blocks.to_string()),
                dim(&output.stats.footnotes_linked.to_string()),
                dim(&output.stats.footnotes_total.to_string()),
                output.stats.total_duration_ms,
            );
        }
    }

    Ok(())
}
