//! Vertex degrees and degree-based classification.
//!
//! # Counting rules
//!
//! An edge is an adjacency entry equal to exactly `1`.
//!
//! - **Directed**: every edge `i → j` adds one to `deg(i)` and one to
//!   `deg(j)`, so `deg = out + in`. A self-loop adds two.
//! - **Undirected**: the matrix is symmetric after closure, so each
//!   unordered pair `{i, j}` is counted once, from the row with the
//!   smaller index. A self-loop still adds two.
//!
//! # Classification
//!
//! - **Hanging** (pendant): degree exactly 1.
//! - **Isolated**: degree 0, or degree 2 made up entirely of a self-loop.

use serde::Serialize;

use matgraph_core::graph::Graph;

// ---------------------------------------------------------------------------
// Degrees
// ---------------------------------------------------------------------------

/// Total degree of every vertex.
#[must_use]
pub fn vertex_degree(graph: &Graph) -> Vec<usize> {
    let n = graph.order();
    let directed = graph.is_directed();
    let mut degrees = vec![0; n];

    for i in 0..n {
        for j in 0..n {
            // Undirected pair already counted from row j.
            if !directed && j < i && graph.has_edge(j, i) {
                continue;
            }
            if graph.has_edge(i, j) {
                degrees[i] += 1;
                degrees[j] += 1;
            }
        }
    }

    degrees
}

/// Out-degree of every vertex, or `None` for an undirected graph.
#[must_use]
pub fn positive_half_degree(graph: &Graph) -> Option<Vec<usize>> {
    graph.is_directed().then(|| {
        let n = graph.order();
        (0..n)
            .map(|i| (0..n).filter(|&j| graph.has_edge(i, j)).count())
            .collect()
    })
}

/// In-degree of every vertex, or `None` for an undirected graph.
#[must_use]
pub fn negative_half_degree(graph: &Graph) -> Option<Vec<usize>> {
    graph.is_directed().then(|| {
        let n = graph.order();
        (0..n)
            .map(|j| (0..n).filter(|&i| graph.has_edge(i, j)).count())
            .collect()
    })
}

/// The shared degree if every vertex has the same one, else `None`.
#[must_use]
pub fn regularity_degree(graph: &Graph) -> Option<usize> {
    regular_degree_of(&vertex_degree(graph))
}

/// Vertices of degree exactly 1, ascending.
#[must_use]
pub fn hanging_vertices(graph: &Graph) -> Vec<usize> {
    hanging_of(&vertex_degree(graph))
}

/// Vertices with no incident edges other than a self-loop, ascending.
#[must_use]
pub fn isolated_vertices(graph: &Graph) -> Vec<usize> {
    isolated_of(graph, &vertex_degree(graph))
}

fn regular_degree_of(degrees: &[usize]) -> Option<usize> {
    let (&first, rest) = degrees.split_first()?;
    rest.iter().all(|&d| d == first).then_some(first)
}

fn hanging_of(degrees: &[usize]) -> Vec<usize> {
    degrees
        .iter()
        .enumerate()
        .filter(|(_, d)| **d == 1)
        .map(|(v, _)| v)
        .collect()
}

fn isolated_of(graph: &Graph, degrees: &[usize]) -> Vec<usize> {
    degrees
        .iter()
        .enumerate()
        .filter(|&(v, &d)| d == 0 || (d == 2 && graph.has_edge(v, v)))
        .map(|(v, _)| v)
        .collect()
}

// ---------------------------------------------------------------------------
// DegreeSummary
// ---------------------------------------------------------------------------

/// All degree statistics for one graph, computed from a single degree pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeSummary {
    /// Total degree per vertex.
    pub degrees: Vec<usize>,
    /// Out-degree per vertex (directed graphs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_degrees: Option<Vec<usize>>,
    /// In-degree per vertex (directed graphs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_degrees: Option<Vec<usize>>,
    /// Common degree if the graph is regular.
    pub regularity: Option<usize>,
    /// Pendant vertices (degree 1).
    pub hanging: Vec<usize>,
    /// Isolated vertices (degree 0, or only a self-loop).
    pub isolated: Vec<usize>,
}

impl DegreeSummary {
    /// Compute every degree statistic for `graph`.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let degrees = vertex_degree(graph);
        Self {
            out_degrees: positive_half_degree(graph),
            in_degrees: negative_half_degree(graph),
            regularity: regular_degree_of(&degrees),
            hanging: hanging_of(&degrees),
            isolated: isolated_of(graph, &degrees),
            degrees,
        }
    }

    /// Sum of all vertex degrees.
    #[must_use]
    pub fn total(&self) -> usize {
        self.degrees.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
