//! The graph model: an immutable adjacency matrix plus its orientation.
//!
//! # Overview
//!
//! A [`Graph`] is built once and never mutated. Two construction paths
//! exist, recorded as a [`MatrixSource`]:
//!
//! - **Seeded** ([`Graph::generate`]): a variant identifier is resolved to
//!   [`VariantParams`], a [`DeterministicRng`] seeded from parameter 0 fills
//!   every cell with `uniform[0,1) + {0,1}`, and each cell is multiplied by
//!   the coefficient scale and floored.
//! - **Supplied** ([`Graph::from_matrix`]): the caller's matrix is taken
//!   as-is.
//!
//! For [`Orientation::Undirected`] either path is followed by one symmetric
//! closure pass: every `a[i][j] == 1` forces `a[j][i] = 1`.
//!
//! # Edges
//!
//! Generation can leave entries such as `2` or `3` in the matrix. Only an
//! entry of exactly `1` is an edge; see [`Graph::has_edge`].

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GraphError;
use crate::matrix::Matrix;
use crate::rng::DeterministicRng;
use crate::variant::{VariantLookup, VariantParams};

// ---------------------------------------------------------------------------
// Construction policy
// ---------------------------------------------------------------------------

/// Whether edges are ordered pairs or unordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Directed,
    Undirected,
}

impl Orientation {
    /// `true` for [`Orientation::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }

    const fn tag(self) -> u8 {
        match self {
            Self::Directed => 0,
            Self::Undirected => 1,
        }
    }
}

/// Where the adjacency matrix came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MatrixSource {
    /// Generated from a variant identifier and scale coefficients.
    Seeded {
        variant: u32,
        params: VariantParams,
        coefficients: Vec<f64>,
    },
    /// Supplied directly by the caller.
    Supplied,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A finite graph over vertices `0..order`, stored as a dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    adjacency: Matrix,
    orientation: Orientation,
    source: MatrixSource,
}

impl Graph {
    /// Generate a graph deterministically from a variant identifier.
    ///
    /// Identical `(variant, coefficients, orientation)` always produce a
    /// bit-identical matrix.
    ///
    /// # Errors
    ///
    /// Propagates lookup failures, [`GraphError::InvalidOrder`] for
    /// parameters giving fewer than one vertex,
    /// [`GraphError::MissingCoefficients`] for an empty coefficient list, and
    /// [`GraphError::InvalidScale`] when the coefficients give a negative
    /// scale.
    pub fn generate<L: VariantLookup + ?Sized>(
        lookup: &L,
        variant: u32,
        coefficients: &[f64],
        orientation: Orientation,
    ) -> Result<Self, GraphError> {
        let params = lookup.params(variant)?;
        let order = params.order()?;
        let k = params.scale(coefficients)?;

        let mut rng = DeterministicRng::new(params.seed());
        let base = Matrix::from_fn(order, |_, _| scaled_cell(&mut rng, k));
        debug!(variant, order, k, "generated base matrix");

        Ok(Self::assemble(
            base,
            orientation,
            MatrixSource::Seeded {
                variant,
                params,
                coefficients: coefficients.to_vec(),
            },
        ))
    }

    /// Wrap a caller-supplied matrix; the order is the matrix dimension.
    ///
    /// No scaling or flooring is applied. Undirected graphs still get the
    /// symmetric closure pass.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] for a zero-order matrix and
    /// [`GraphError::NegativeEntry`] for the first negative cell in
    /// row-major order.
    pub fn from_matrix(matrix: Matrix, orientation: Orientation) -> Result<Self, GraphError> {
        if matrix.order() == 0 {
            return Err(GraphError::EmptyGraph);
        }
        check_non_negative(&matrix)?;
        Ok(Self::assemble(matrix, orientation, MatrixSource::Supplied))
    }

    fn assemble(mut adjacency: Matrix, orientation: Orientation, source: MatrixSource) -> Self {
        if orientation == Orientation::Undirected {
            symmetric_closure(&mut adjacency);
        }
        let graph = Self {
            adjacency,
            orientation,
            source,
        };
        debug!(
            order = graph.order(),
            ?orientation,
            edges = graph.edge_count(),
            "graph constructed"
        );
        graph
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Number of vertices.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.adjacency.order()
    }

    /// The adjacency matrix (read-only).
    #[must_use]
    pub const fn adjacency(&self) -> &Matrix {
        &self.adjacency
    }

    /// `true` unless the graph was built undirected.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.orientation.is_directed()
    }

    /// The orientation fixed at construction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// How the matrix was produced.
    #[must_use]
    pub const fn source(&self) -> &MatrixSource {
        &self.source
    }

    /// `true` iff `a[from][to] == 1` exactly.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of range.
    #[must_use]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency.get(from, to) == 1
    }

    /// Number of matrix entries equal to `1`.
    ///
    /// For undirected graphs each non-loop edge is stored twice.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edges().count()
    }

    /// Validate a vertex index against this graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex >= order`.
    pub const fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.order() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                order: self.order(),
            })
        }
    }

    /// Stable BLAKE3 fingerprint over orientation and matrix contents.
    ///
    /// Two graphs share a fingerprint iff they have the same orientation and
    /// bit-identical matrices. Useful as a cache key for derived matrices.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.order() as u64).to_le_bytes());
        hasher.update(&[self.orientation.tag()]);
        for row in self.adjacency.rows() {
            for value in row {
                hasher.update(&value.to_le_bytes());
            }
        }
        format!("blake3:{}", hasher.finalize().to_hex())
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// One generated cell: `floor((uniform[0,1) + {0,1}) * k)`.
#[allow(clippy::cast_possible_truncation)]
fn scaled_cell<R: Rng>(rng: &mut R, k: f64) -> i64 {
    let fraction: f64 = rng.r#gen();
    let whole = f64::from(u8::from(rng.gen_bool(0.5)));
    ((fraction + whole) * k).floor() as i64
}

fn check_non_negative(matrix: &Matrix) -> Result<(), GraphError> {
    for (row, values) in matrix.rows().enumerate() {
        if let Some(col) = values.iter().position(|&v| v < 0) {
            return Err(GraphError::NegativeEntry {
                row,
                col,
                value: values[col],
            });
        }
    }
    Ok(())
}

fn symmetric_closure(matrix: &mut Matrix) {
    let n = matrix.order();
    for i in 0..n {
        for j in 0..n {
            if matrix.get(i, j) == 1 {
                matrix.set(j, i, 1);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{DigitVariants, VariantTable};

    const COEFS: [f64; 4] = [0.75, 0.0, -0.02, -0.005];

    fn supplied(rows: &[&[i64]], orientation: Orientation) -> Graph {
        let matrix = Matrix::from_rows(rows).expect("square");
        Graph::from_matrix(matrix, orientation).expect("non-empty")
    }

    #[test]
    fn generated_order_is_ten_plus_last_parameter() {
        let g = Graph::generate(&DigitVariants, 3213, &COEFS, Orientation::Directed)
            .expect("valid variant");
        assert_eq!(g.order(), 13);
        assert!(g.is_directed());
    }

    #[test]
    fn generation_is_deterministic() {
        let a = Graph::generate(&DigitVariants, 4507, &COEFS, Orientation::Directed)
            .expect("valid variant");
        let b = Graph::generate(&DigitVariants, 4507, &COEFS, Orientation::Directed)
            .expect("valid variant");
        assert_eq!(a.adjacency(), b.adjacency());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn generated_entries_are_bounded_by_scale() {
        // Each cell lies in [0, 2) before scaling, so with k = 1 entries are 0 or 1.
        let table = VariantTable::new([(1, [99, 0, 0, 0])]);
        let g = Graph::generate(&table, 1, &[1.0], Orientation::Directed).expect("valid");
        assert!(g.adjacency().rows().flatten().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn larger_scale_produces_non_edge_entries() {
        // With k = 3 cells span [0, 6); many exceed 1 and are not edges.
        let table = VariantTable::new([(1, [5, 0, 0, 0])]);
        let g = Graph::generate(&table, 1, &[3.0], Orientation::Directed).expect("valid");
        let non_edges = g.adjacency().rows().flatten().filter(|&&v| v > 1).count();
        assert!(non_edges > 0, "expected some entries above 1");
        assert_eq!(
            g.edge_count(),
            g.adjacency().rows().flatten().filter(|&&v| v == 1).count()
        );
    }

    #[test]
    fn undirected_generation_is_symmetric_on_edges() {
        let g = Graph::generate(&DigitVariants, 3213, &COEFS, Orientation::Undirected)
            .expect("valid variant");
        assert!(!g.is_directed());
        for i in 0..g.order() {
            for j in 0..g.order() {
                assert_eq!(g.has_edge(i, j), g.has_edge(j, i), "pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn undirected_closure_only_touches_edges() {
        // A 2 entry has no mirrored counterpart; a 1 entry does.
        let g = supplied(&[&[0, 1, 2], &[0, 0, 0], &[0, 0, 0]], Orientation::Undirected);
        assert!(g.has_edge(1, 0), "edge mirrored");
        assert_eq!(g.adjacency().get(2, 0), 0, "non-edge not mirrored");
    }

    #[test]
    fn supplied_matrix_is_taken_verbatim() {
        let g = supplied(&[&[0, 3], &[1, 0]], Orientation::Directed);
        assert_eq!(g.order(), 2);
        assert_eq!(g.adjacency().get(0, 1), 3);
        assert!(!g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
        assert_eq!(g.source(), &MatrixSource::Supplied);
    }

    #[test]
    fn empty_matrix_is_rejected() {
        assert_eq!(
            Graph::from_matrix(Matrix::zeros(0), Orientation::Directed),
            Err(GraphError::EmptyGraph)
        );
    }

    #[test]
    fn negative_cells_are_rejected() {
        let matrix = Matrix::from_rows(&[[0, 1], [-1, 0]]).expect("square");
        assert_eq!(
            Graph::from_matrix(matrix, Orientation::Undirected),
            Err(GraphError::NegativeEntry {
                row: 1,
                col: 0,
                value: -1
            })
        );
    }

    #[test]
    fn negative_scale_fails_before_generation() {
        // k = -1 would floor every cell to -1 or -2.
        let table = VariantTable::new([(7, [7, 0, 0, -8])]);
        let err = Graph::generate(&table, 7, &[-1.0], Orientation::Directed).unwrap_err();
        assert!(matches!(err, GraphError::InvalidScale { .. }), "{err}");
    }

    #[test]
    fn generated_entries_are_never_negative() {
        for variant in [1000, 3213, 4507, 9999] {
            let g = Graph::generate(&DigitVariants, variant, &COEFS, Orientation::Directed)
                .expect("valid variant");
            assert!(g.adjacency().rows().flatten().all(|&v| v >= 0), "variant {variant}");
        }
    }

    #[test]
    fn fingerprint_depends_on_orientation() {
        let rows: &[&[i64]] = &[&[0, 1], &[1, 0]];
        let directed = supplied(rows, Orientation::Directed);
        let undirected = supplied(rows, Orientation::Undirected);
        assert_eq!(directed.adjacency(), undirected.adjacency());
        assert_ne!(directed.fingerprint(), undirected.fingerprint());
        assert!(directed.fingerprint().starts_with("blake3:"));
    }

    #[test]
    fn check_vertex_bounds() {
        let g = supplied(&[&[0]], Orientation::Directed);
        assert!(g.check_vertex(0).is_ok());
        assert_eq!(
            g.check_vertex(1),
            Err(GraphError::VertexOutOfRange { vertex: 1, order: 1 })
        );
    }

    #[test]
    fn generation_errors_propagate() {
        assert_eq!(
            Graph::generate(&DigitVariants, 12, &COEFS, Orientation::Directed),
            Err(GraphError::UnknownVariant(12))
        );
        assert_eq!(
            Graph::generate(&DigitVariants, 3213, &[], Orientation::Directed),
            Err(GraphError::MissingCoefficients)
        );
    }
}
