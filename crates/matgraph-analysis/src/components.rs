//! Strongly connected components and the condensation graph.
//!
//! # Overview
//!
//! Components are read straight off the strong-connectivity matrix: scan
//! vertices in index order, and each vertex not yet assigned opens a new
//! component containing every `j` with `S[i][j] == 1`. Components are
//! therefore ordered by their smallest member, and members are ascending.
//!
//! The condensation matrix `C` has one row per component. For each ordered
//! pair `(p, q)` in row-major order, `C[p][q]` is left at zero when
//! `p == q` or when `C[q][p]` was already set; otherwise it is set to `1`
//! iff some member of `p` has an edge to some member of `q`.

use fixedbitset::FixedBitSet;
use serde::Serialize;
use tracing::{debug, instrument};

use matgraph_core::graph::Graph;
use matgraph_core::matrix::Matrix;

use crate::reach::strong_connectivity;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One strongly connected component: its member vertices, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Component {
    members: Vec<usize>,
}

impl Component {
    /// Member vertices in ascending order.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of member vertices (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` if the component has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `true` if `vertex` belongs to this component.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.members.binary_search(&vertex).is_ok()
    }

    /// Smallest member vertex.
    ///
    /// # Panics
    ///
    /// Panics on an empty component. Components returned by
    /// [`connected_components`] always contain their seed vertex.
    #[must_use]
    pub fn representative(&self) -> usize {
        self.members[0]
    }
}

/// The condensation of a graph: its components plus the component matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condensation {
    pub components: Vec<Component>,
    pub matrix: Matrix,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Partition the vertices of `graph` into strongly connected components.
#[must_use]
pub fn connected_components(graph: &Graph) -> Vec<Component> {
    components_from_strong(&strong_connectivity(graph))
}

/// Collapse each component of `graph` to a single vertex.
#[must_use]
pub fn condensation(graph: &Graph) -> Condensation {
    condense(graph, connected_components(graph))
}

pub(crate) fn components_from_strong(strong: &Matrix) -> Vec<Component> {
    let n = strong.order();
    let mut assigned = FixedBitSet::with_capacity(n);
    let mut components = Vec::new();

    for i in 0..n {
        if assigned.contains(i) {
            continue;
        }
        let members: Vec<usize> = (0..n).filter(|&j| strong.get(i, j) == 1).collect();
        for &member in &members {
            assigned.insert(member);
        }
        components.push(Component { members });
    }

    components
}

#[instrument(skip_all, fields(components = components.len()))]
pub(crate) fn condense(graph: &Graph, components: Vec<Component>) -> Condensation {
    let m = components.len();
    let mut linked = FixedBitSet::with_capacity(m * m);

    for p in 0..m {
        for q in 0..m {
            if p == q || linked.contains(q * m + p) {
                continue;
            }
            if has_cross_edge(graph, &components[p], &components[q]) {
                linked.insert(p * m + q);
            }
        }
    }

    let matrix = Matrix::from_fn(m, |p, q| i64::from(linked.contains(p * m + q)));
    debug!(edges = linked.count_ones(..), "condensation built");
    Condensation { components, matrix }
}

fn has_cross_edge(graph: &Graph, from: &Component, to: &Component) -> bool {
    from.members()
        .iter()
        .any(|&u| to.members().iter().any(|&v| graph.has_edge(u, v)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use matgraph_core::graph::Orientation;

    fn graph(rows: &[&[i64]]) -> Graph {
        Graph::from_matrix(Matrix::from_rows(rows).expect("square"), Orientation::Directed)
            .expect("non-empty")
    }

    fn members(components: &[Component]) -> Vec<Vec<usize>> {
        components.iter().map(|c| c.members().to_vec()).collect()
    }

    #[test]
    fn three_cycle_is_one_component() {
        let g = graph(&[&[0, 1, 0], &[0, 0, 1], &[1, 0, 0]]);
        let c = condensation(&g);
        assert_eq!(members(&c.components), vec![vec![0, 1, 2]]);
        assert_eq!(c.matrix, Matrix::zeros(1));
    }

    #[test]
    fn one_way_edge_gives_two_components() {
        let g = graph(&[&[0, 1], &[0, 0]]);
        let c = condensation(&g);
        assert_eq!(members(&c.components), vec![vec![0], vec![1]]);
        assert_eq!(c.matrix, Matrix::from_rows(&[[0, 1], [0, 0]]).expect("square"));
    }

    #[test]
    fn components_ordered_by_smallest_member() {
        // {1, 3} form a cycle; 0 and 2 are singletons.
        let g = graph(&[&[0, 1, 0, 0], &[0, 0, 0, 1], &[0, 0, 0, 0], &[0, 1, 1, 0]]);
        let comps = connected_components(&g);
        assert_eq!(members(&comps), vec![vec![0], vec![1, 3], vec![2]]);
        assert_eq!(comps[1].representative(), 1);
        assert!(comps[1].contains(3));
        assert!(!comps[1].contains(2));
    }

    #[test]
    fn condensation_links_component_members() {
        let g = graph(&[&[0, 1, 0, 0], &[0, 0, 0, 1], &[0, 0, 0, 0], &[0, 1, 1, 0]]);
        let c = condensation(&g);
        // {0} -> {1,3} and {1,3} -> {2}
        assert_eq!(
            c.matrix,
            Matrix::from_rows(&[[0, 1, 0], [0, 0, 1], [0, 0, 0]]).expect("square")
        );
    }

    #[test]
    fn condensation_never_links_both_directions() {
        // {0,1} -> {2,3} -> {4}
        let g = graph(&[
            &[0, 1, 0, 0, 0],
            &[1, 0, 1, 0, 0],
            &[0, 0, 0, 1, 0],
            &[0, 0, 1, 0, 1],
            &[0, 0, 0, 0, 0],
        ]);
        let c = condensation(&g);
        let m = c.matrix.order();
        assert_eq!(m, 3);
        for p in 0..m {
            for q in 0..m {
                assert!(
                    !(c.matrix.get(p, q) == 1 && c.matrix.get(q, p) == 1),
                    "both ({p}, {q}) and ({q}, {p}) set"
                );
            }
        }
    }

    #[test]
    fn condensation_ignores_non_unit_entries() {
        let g = graph(&[&[0, 2], &[0, 0]]);
        let c = condensation(&g);
        // The 2 makes vertex 1 reachable from 0, but is not an edge.
        assert_eq!(c.components.len(), 2);
        assert_eq!(c.matrix, Matrix::zeros(2));
    }
}
