//! Shared output layer for pretty/text/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: pretty output for humans, compact text for scripts, or
//! stable JSON.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` flag
//! 2. `--json`, then the `FORMAT` env var, then `output` in the user config
//!    (resolved by `matgraph_core::config::resolve_config`)
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.
//!
//! # Vertex labels
//!
//! Pretty and text output number vertices from 1. JSON keeps the 0-based
//! indices used by the library.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use matgraph_core::ErrorCode;
use matgraph_core::matrix::Matrix;

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<14} {}", format!("{key}:"), value.as_ref())
}

/// 1-based vertex labels joined by spaces, or `-` when empty.
pub fn vertex_labels(vertices: &[usize]) -> String {
    if vertices.is_empty() {
        return "-".to_string();
    }
    vertices
        .iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write a matrix as aligned rows.
///
/// With `labelled`, a header of 1-based column labels and a row label
/// column are added.
pub fn write_matrix(w: &mut dyn Write, matrix: &Matrix, labelled: bool) -> io::Result<()> {
    let width = matrix
        .rows()
        .flatten()
        .map(|v| v.to_string().len())
        .chain(std::iter::once(matrix.order().to_string().len()))
        .max()
        .unwrap_or(1);

    if labelled {
        write!(w, "{:>width$} ", "")?;
        for col in 1..=matrix.order() {
            write!(w, " {col:>width$}")?;
        }
        writeln!(w)?;
    }

    for (idx, row) in matrix.rows().enumerate() {
        if labelled {
            write!(w, "{:>width$} ", idx + 1)?;
        }
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        if labelled {
            writeln!(w, " {}", cells.join(" "))?;
        } else {
            writeln!(w, "{}", cells.join(" "))?;
        }
    }
    Ok(())
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (sections, labelled matrices).
    Pretty,
    /// Plain text for scripts and pipes.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "pretty" => Some(Self::Pretty),
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Resolve the output mode from the `--format` flag and the mode name
/// already resolved from `--json`, environment, user config and TTY.
pub fn resolve_output_mode(format_flag: Option<OutputMode>, resolved: &str) -> OutputMode {
    format_flag
        .or_else(|| OutputMode::from_name(resolved))
        .unwrap_or(OutputMode::Text)
}

// ────────────────────────────────────────────────────────────────────────────
// Render API
// ────────────────────────────────────────────────────────────────────────────

/// Render a serializable value with explicit pretty/text renderers.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_mode_to(&mut out, mode, value, text_fn, pretty_fn)
}

fn render_mode_to<T: Serialize>(
    out: &mut dyn Write,
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, out)?,
        OutputMode::Pretty => pretty_fn(value, out)?,
    }
    Ok(())
}

/// A structured error with optional suggestion and error code.
#[derive(Debug, Serialize)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable error code (`E####`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// Create a simple error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            error_code: None,
        }
    }

    /// Create an error carrying a stable code and its hint.
    pub fn with_code(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            suggestion: code.hint().map(str::to_string),
            error_code: Some(code.code().to_string()),
        }
    }
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    render_error_to(&mut out, mode, error)
}

fn render_error_to(out: &mut dyn Write, mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({
                "error": error,
            });
            serde_json::to_writer_pretty(&mut *out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            match &error.error_code {
                Some(code) => writeln!(out, "error[{code}]: {}", error.message)?,
                None => writeln!(out, "error: {}", error.message)?,
            }
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(f: impl FnOnce(&mut dyn Write) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("render succeeds");
        String::from_utf8(buf).expect("utf-8 output")
    }

    // ── OutputMode ──────────────────────────────────────────────────────────

    #[test]
    fn format_flag_wins_over_resolved_mode() {
        assert_eq!(
            resolve_output_mode(Some(OutputMode::Text), "json"),
            OutputMode::Text
        );
    }

    #[test]
    fn resolved_mode_names_map_to_modes() {
        assert_eq!(resolve_output_mode(None, "json"), OutputMode::Json);
        assert_eq!(resolve_output_mode(None, "pretty"), OutputMode::Pretty);
        assert_eq!(resolve_output_mode(None, "text"), OutputMode::Text);
        assert_eq!(resolve_output_mode(None, "bogus"), OutputMode::Text);
    }

    // ── Helpers ─────────────────────────────────────────────────────────────

    #[test]
    fn vertex_labels_are_one_based() {
        assert_eq!(vertex_labels(&[0, 2, 9]), "1 3 10");
        assert_eq!(vertex_labels(&[]), "-");
    }

    #[test]
    fn plain_matrix_rows() {
        let m = Matrix::from_rows(&[[0, 1], [1, 0]]).expect("square");
        let out = captured(|w| Ok(write_matrix(w, &m, false)?));
        assert_eq!(out, "0 1\n1 0\n");
    }

    #[test]
    fn labelled_matrix_has_headers() {
        let m = Matrix::from_rows(&[[0, 1], [1, 0]]).expect("square");
        let out = captured(|w| Ok(write_matrix(w, &m, true)?));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   1 2");
        assert_eq!(lines[1], "1  0 1");
        assert_eq!(lines[2], "2  1 0");
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    #[derive(Serialize)]
    struct Sample {
        order: usize,
    }

    #[test]
    fn render_json_output() {
        let out = captured(|w| {
            render_mode_to(
                w,
                OutputMode::Json,
                &Sample { order: 3 },
                |_, _| Ok(()),
                |_, _| Ok(()),
            )
        });
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(parsed["order"], 3);
    }

    #[test]
    fn render_text_and_pretty_use_their_closures() {
        let sample = Sample { order: 3 };
        let text = captured(|w| {
            render_mode_to(
                w,
                OutputMode::Text,
                &sample,
                |s, w| writeln!(w, "order {}", s.order),
                |_, w| writeln!(w, "pretty"),
            )
        });
        assert_eq!(text, "order 3\n");

        let pretty = captured(|w| {
            render_mode_to(
                w,
                OutputMode::Pretty,
                &sample,
                |_, w| writeln!(w, "text"),
                |s, w| pretty_kv(w, "Order", s.order.to_string()),
            )
        });
        assert!(pretty.starts_with("Order:"));
        assert!(pretty.trim_end().ends_with('3'));
    }

    // ── Errors ──────────────────────────────────────────────────────────────

    #[test]
    fn cli_error_with_code_carries_hint() {
        let err = CliError::with_code("bad length", ErrorCode::InvalidWalkLength);
        assert_eq!(err.error_code.as_deref(), Some("E3001"));
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn render_error_json() {
        let err = CliError::with_code("unknown variant identifier: 12", ErrorCode::UnknownVariant);
        let out = captured(|w| render_error_to(w, OutputMode::Json, &err));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(parsed["error"]["error_code"], "E2003");
        assert_eq!(parsed["error"]["message"], "unknown variant identifier: 12");
    }

    #[test]
    fn render_error_human() {
        let out = captured(|w| render_error_to(w, OutputMode::Text, &CliError::new("boom")));
        assert_eq!(out, "error: boom\n");
    }
}
