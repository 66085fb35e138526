//! Error taxonomy for graph construction and analysis.
//!
//! Only caller-supplied input is reported through [`GraphError`]. Dimension
//! mismatches between matrices built inside the crate are programmer errors
//! and panic at the violated precondition instead.

use std::fmt;

/// Errors raised while building or querying a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    /// A supplied matrix row has the wrong number of columns.
    #[error("matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The variant parameters produce a non-positive vertex count.
    #[error("variant parameters yield invalid vertex count {0}")]
    InvalidOrder(i64),

    /// The variant lookup has no parameters for this identifier.
    #[error("unknown variant identifier: {0}")]
    UnknownVariant(u32),

    /// Generation needs at least the constant coefficient.
    #[error("at least one generation coefficient is required")]
    MissingCoefficients,

    /// The coefficients give a negative or non-finite scale, which would
    /// generate negative entries.
    #[error("generation scale must be finite and non-negative, got {scale}")]
    InvalidScale { scale: String },

    /// Adjacency entries count walks and cannot be negative.
    #[error("adjacency entry ({row}, {col}) is negative: {value}")]
    NegativeEntry { row: usize, col: usize, value: i64 },

    /// Walks have length one or more.
    #[error("walk length must be at least 1, got {0}")]
    InvalidWalkLength(usize),

    /// A vertex index outside `0..order`.
    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },
}

impl GraphError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyGraph | Self::InvalidOrder(_) => ErrorCode::InvalidOrder,
            Self::NotSquare { .. } => ErrorCode::NotSquare,
            Self::UnknownVariant(_) => ErrorCode::UnknownVariant,
            Self::MissingCoefficients => ErrorCode::MissingCoefficients,
            Self::InvalidScale { .. } => ErrorCode::InvalidScale,
            Self::NegativeEntry { .. } => ErrorCode::NegativeEntry,
            Self::InvalidWalkLength(_) => ErrorCode::InvalidWalkLength,
            Self::VertexOutOfRange { .. } => ErrorCode::VertexOutOfRange,
        }
    }
}

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    MatrixParseError,
    NotSquare,
    InvalidOrder,
    UnknownVariant,
    MissingCoefficients,
    InvalidScale,
    NegativeEntry,
    InvalidWalkLength,
    VertexOutOfRange,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::MatrixParseError => "E1002",
            Self::NotSquare => "E2001",
            Self::InvalidOrder => "E2002",
            Self::UnknownVariant => "E2003",
            Self::MissingCoefficients => "E2004",
            Self::InvalidScale => "E2005",
            Self::NegativeEntry => "E2006",
            Self::InvalidWalkLength => "E3001",
            Self::VertexOutOfRange => "E3002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::MatrixParseError => "Matrix file parse error",
            Self::NotSquare => "Adjacency matrix is not square",
            Self::InvalidOrder => "Invalid vertex count",
            Self::UnknownVariant => "Unknown variant identifier",
            Self::MissingCoefficients => "Missing generation coefficients",
            Self::InvalidScale => "Invalid generation scale",
            Self::NegativeEntry => "Negative adjacency entry",
            Self::InvalidWalkLength => "Invalid walk length",
            Self::VertexOutOfRange => "Vertex out of range",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .matgraph/config.toml and retry."),
            Self::MatrixParseError => {
                Some("Supply a JSON array of rows or one whitespace-separated row per line.")
            }
            Self::NotSquare => Some("Every row must have as many entries as there are rows."),
            Self::InvalidOrder => Some("Use variant parameters that give at least one vertex."),
            Self::UnknownVariant => {
                Some("Use a four-digit variant or add it under [variants] in the config.")
            }
            Self::MissingCoefficients => Some("Pass at least one --coef value."),
            Self::InvalidScale => {
                Some("Choose coefficients whose weighted sum is zero or positive.")
            }
            Self::NegativeEntry => Some("Adjacency matrices hold non-negative integers only."),
            Self::InvalidWalkLength => Some("Request walks of length 1 or more."),
            Self::VertexOutOfRange => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, GraphError};
    use std::collections::HashSet;

    const ALL: [ErrorCode; 10] = [
        ErrorCode::ConfigParseError,
        ErrorCode::MatrixParseError,
        ErrorCode::NotSquare,
        ErrorCode::InvalidOrder,
        ErrorCode::UnknownVariant,
        ErrorCode::MissingCoefficients,
        ErrorCode::InvalidScale,
        ErrorCode::NegativeEntry,
        ErrorCode::InvalidWalkLength,
        ErrorCode::VertexOutOfRange,
    ];

    #[test]
    fn all_codes_are_unique() {
        let codes: HashSet<&str> = ALL.iter().map(|code| code.code()).collect();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn codes_follow_pattern() {
        for code in ALL {
            let s = code.code();
            assert_eq!(s.len(), 5, "{s} should be five characters");
            assert!(s.starts_with('E'));
            assert!(s[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn graph_errors_map_to_codes() {
        assert_eq!(GraphError::EmptyGraph.code(), ErrorCode::InvalidOrder);
        assert_eq!(
            GraphError::InvalidWalkLength(0).code().code(),
            "E3001",
            "walk length code is stable"
        );
        assert_eq!(
            GraphError::NotSquare {
                row: 1,
                expected: 2,
                found: 3
            }
            .to_string(),
            "matrix is not square: row 1 has 3 entries, expected 2"
        );
        assert_eq!(
            GraphError::NegativeEntry {
                row: 0,
                col: 1,
                value: -1
            }
            .code()
            .code(),
            "E2006"
        );
    }
}
