//! Reachability and strong connectivity matrices.
//!
//! `R = clamp(I + A + A² + … + A^(N-1))` marks `(i, j)` when `j` can be
//! reached from `i` in fewer than `N` steps. Every vertex reaches itself.
//! `S = R ⊙ Rᵀ` then marks mutually reachable pairs.
//!
//! The powers are taken over the raw adjacency matrix, so any nonzero
//! entry contributes to reachability.

use tracing::instrument;

use matgraph_core::graph::Graph;
use matgraph_core::matrix::Matrix;

/// Boolean reachability matrix of `graph`.
#[must_use]
#[instrument(skip(graph), fields(order = graph.order()))]
pub fn reachability(graph: &Graph) -> Matrix {
    let a = graph.adjacency();
    let n = graph.order();

    let mut sum = Matrix::identity(n);
    let mut power = a.clone();
    for step in 1..n {
        sum = sum.add(&power);
        if step + 1 < n {
            power = power.multiply(a);
        }
    }

    sum.boolean_clamp()
}

/// Boolean strong-connectivity matrix of `graph`.
#[must_use]
pub fn strong_connectivity(graph: &Graph) -> Matrix {
    strong_from_reachability(&reachability(graph))
}

pub(crate) fn strong_from_reachability(reach: &Matrix) -> Matrix {
    reach.hadamard(&reach.transpose())
}
