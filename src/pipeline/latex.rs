//! LaTeX escaping for Markdown embedding.
//!
//! Docs reports that contain math use `$$…$$` display blocks and, for
//! inline notation, constructs like `$|\nabla \mathcal{L}|$`. Markdown
//! renderers (and the MathJax/KaTeX layers on top of them) eat single
//! backslashes and turn `_` into emphasis, so inside detected math spans
//! every backslash is doubled and every not-yet-escaped underscore gets a
//! backslash.
//!
//! Two spans are detected, each non-greedy and spanning newlines:
//!
//! 1. `$$…$$` display blocks.
//! 2. `|…|` spans containing at least one backslash — a coarse marker for
//!    inline math. This over-matches (a pipe-delimited table row with an
//!    unrelated `\` qualifies) and under-matches (`$…$` without pipes is
//!    missed); it is a best-effort heuristic, kept deliberately as-is.
//!
//! Each regex match is processed once, left to right. The passes are
//! independent: the pipe pass runs over the full text after the display
//! pass, with no de-duplication of overlapping spans.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_DISPLAY_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\$\$.*?\$\$").unwrap());
static RE_PIPE_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\|.*?\\.*?\|").unwrap());

/// Escape math spans in the assembled Markdown.
///
/// Identity transform for text with no matching spans; never fails.
pub fn escape_latex(input: &str) -> String {
    let s = RE_DISPLAY_MATH.replace_all(input, |caps: &regex::Captures<'_>| {
        escape_math_span(&caps[0])
    });
    let s = RE_PIPE_MATH.replace_all(&s, |caps: &regex::Captures<'_>| escape_math_span(&caps[0]));
    s.into_owned()
}

/// Double backslashes, then escape underscores not already preceded by a
/// backslash. The underscore scan runs on the doubled text, so an
/// originally-escaped `\_` (now `\\_`) is left alone.
fn escape_math_span(span: &str) -> String {
    let doubled = span.replace('\\', "\\\\");
    let mut out = String::with_capacity(doubled.len() + 4);
    let mut prev = '\0';
    for c in doubled.chars() {
        if c == '_' && prev != '\\' {
            out.push('\\');
        }
        out.push(c);
        prev = c;
    }
    out
}
