//! Graph source flags shared by every analysis command.
//!
//! A graph comes either from a matrix file (`--matrix`) or from a variant
//! (`--variant`, falling back to `[generation] variant` in the project
//! config). Coefficients and orientation fall back to the config the same
//! way.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use matgraph_core::GraphError;
use matgraph_core::config::ProjectConfig;
use matgraph_core::graph::{Graph, Orientation};
use matgraph_core::matrix::Matrix;

/// Where to get the graph from.
#[derive(Args, Debug, Default, Clone)]
pub struct GraphArgs {
    /// Variant identifier to generate the graph from.
    #[arg(long, conflicts_with = "matrix")]
    pub variant: Option<u32>,

    /// Scale coefficient; repeat for c0, c1, c2, c3.
    #[arg(long = "coef", value_name = "C", allow_negative_numbers = true)]
    pub coefficients: Vec<f64>,

    /// Treat the graph as undirected (symmetric closure on edges).
    #[arg(long)]
    pub undirected: bool,

    /// Read the adjacency matrix from a file instead of generating it.
    #[arg(long, value_name = "FILE")]
    pub matrix: Option<PathBuf>,
}

/// Why a matrix file could not be read as a square integer matrix.
#[derive(Debug, thiserror::Error)]
pub enum MatrixFileError {
    /// The file starts with `[` but is not a JSON array of integer rows.
    #[error("invalid JSON matrix: {0}")]
    Json(#[from] serde_json::Error),

    /// A whitespace-separated cell is not an integer.
    #[error("line {line}: '{cell}' is not an integer")]
    Cell { line: usize, cell: String },

    /// The rows do not form a non-empty square matrix.
    #[error(transparent)]
    Shape(#[from] GraphError),
}

impl GraphArgs {
    /// Build the graph these flags describe.
    ///
    /// # Errors
    ///
    /// Fails when no source is given, the matrix file is unreadable or
    /// malformed, or generation rejects the variant or coefficients.
    pub fn load(&self, config: &ProjectConfig) -> Result<Graph> {
        let orientation = if self.undirected {
            Orientation::Undirected
        } else {
            config.generation.orientation
        };

        if let Some(path) = &self.matrix {
            let matrix = read_matrix_file(path)?;
            debug!(path = %path.display(), order = matrix.order(), "loaded matrix file");
            return Ok(Graph::from_matrix(matrix, orientation)?);
        }

        let variant = self
            .variant
            .or(config.generation.variant)
            .context("no graph source: pass --variant or --matrix, or set [generation] variant")?;
        let coefficients = if self.coefficients.is_empty() {
            config.generation.coefficients.as_slice()
        } else {
            self.coefficients.as_slice()
        };

        let lookup = config.variant_lookup()?;
        Ok(Graph::generate(
            lookup.as_ref(),
            variant,
            coefficients,
            orientation,
        )?)
    }
}

fn read_matrix_file(path: &Path) -> Result<Matrix> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_matrix(&content).with_context(|| format!("Invalid matrix file {}", path.display()))
}

/// Parse a matrix from a JSON array of rows or whitespace-separated rows.
///
/// Blank lines and lines starting with `#` are skipped in the row format.
///
/// # Errors
///
/// Returns [`MatrixFileError`] for malformed JSON, a non-integer cell, or
/// rows that do not form a non-empty square matrix.
pub fn parse_matrix(content: &str) -> Result<Matrix, MatrixFileError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str::<Matrix>(trimmed)?);
    }

    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|cell| {
                cell.parse::<i64>().map_err(|_| MatrixFileError::Cell {
                    line: idx + 1,
                    cell: cell.to_string(),
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;
        rows.push(row);
    }

    Ok(Matrix::from_rows(&rows)?)
}
