//! Walks of exact length that never repeat a directed edge.
//!
//! # Overview
//!
//! A walk of length `L` is a vertex sequence `[v0, v1, …, vL]` where each
//! consecutive pair is an edge. Walks are extended one step at a time:
//!
//! 1. Start from every edge `[i, j]`, ordered by `(i, j)`.
//! 2. To build step `s`, for each source `i` and each target `j` in
//!    ascending order, take the walk-count entry `W[i][j]` (the raw
//!    adjacency matrix to the power `s`) as a budget. Scan the step `s-1`
//!    walks from `i` in order while the budget is nonzero. Every walk whose
//!    last vertex `k` has an edge `k → j` consumes one unit of budget; it
//!    is extended with `j` unless the edge `(k, j)` already appears in it.
//!
//! The budget makes the scan stop once the algebraic walk count for
//! `(i, j)` has been spent, including walks that were rejected for
//! repeating an edge. A walk revisiting an edge is never produced, but a
//! valid walk can be missed when an earlier rejected candidate used up the
//! budget.

use serde::Serialize;
use tracing::{debug, instrument, trace};

use matgraph_core::error::GraphError;
use matgraph_core::graph::Graph;

// ---------------------------------------------------------------------------
// Walk
// ---------------------------------------------------------------------------

/// A vertex sequence with at least one step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Walk {
    vertices: Vec<usize>,
}

impl Walk {
    /// The visited vertices, in order.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn length(&self) -> usize {
        self.vertices.len() - 1
    }

    /// First vertex.
    #[must_use]
    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    /// Last vertex.
    #[must_use]
    pub fn target(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// `true` if the directed step `from → to` occurs anywhere in the walk.
    #[must_use]
    pub fn traverses(&self, from: usize, to: usize) -> bool {
        self.vertices.windows(2).any(|w| w[0] == from && w[1] == to)
    }

    fn step(from: usize, to: usize) -> Self {
        Self {
            vertices: vec![from, to],
        }
    }

    fn extended(&self, next: usize) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(next);
        Self { vertices }
    }
}

// ---------------------------------------------------------------------------
// Walks
// ---------------------------------------------------------------------------

/// All walks of one length, grouped by source vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walks {
    length: usize,
    by_source: Vec<Vec<Walk>>,
}

impl Walks {
    /// Length shared by every walk in the set.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Walks starting at `source`, in discovery order. Empty when `source`
    /// is out of range.
    #[must_use]
    pub fn from(&self, source: usize) -> &[Walk] {
        self.by_source.get(source).map_or(&[], Vec::as_slice)
    }

    /// Total number of walks across all sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_source.iter().map(Vec::len).sum()
    }

    /// `true` if no walk of this length exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_source.iter().all(Vec::is_empty)
    }

    /// Every walk, ordered by source then discovery.
    pub fn iter(&self) -> impl Iterator<Item = &Walk> {
        self.by_source.iter().flatten()
    }

    /// Per-source groups, indexed by source vertex.
    pub fn by_source(&self) -> impl Iterator<Item = (usize, &[Walk])> {
        self.by_source
            .iter()
            .enumerate()
            .map(|(source, walks)| (source, walks.as_slice()))
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Every single-edge walk `[i, j]`, ordered by `(i, j)`.
#[must_use]
pub fn one_step_walks(graph: &Graph) -> Walks {
    let n = graph.order();
    let by_source = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| graph.has_edge(i, j))
                .map(|j| Walk::step(i, j))
                .collect()
        })
        .collect();
    Walks {
        length: 1,
        by_source,
    }
}

/// All walks of exactly `length` edges that never repeat a directed edge.
///
/// # Errors
///
/// Returns [`GraphError::InvalidWalkLength`] when `length` is zero.
#[instrument(skip(graph), fields(order = graph.order()))]
pub fn walks_of_length(graph: &Graph, length: usize) -> Result<Walks, GraphError> {
    if length == 0 {
        return Err(GraphError::InvalidWalkLength(length));
    }

    let n = graph.order();
    let a = graph.adjacency();
    let mut walks = one_step_walks(graph);
    let mut budget = a.multiply(a);

    for step in 2..=length {
        let mut by_source = Vec::with_capacity(n);
        for i in 0..n {
            let previous = walks.from(i);
            let mut found = Vec::new();
            for j in 0..n {
                let mut remaining = budget.get(i, j);
                for walk in previous {
                    if remaining == 0 {
                        break;
                    }
                    let k = walk.target();
                    if graph.has_edge(k, j) {
                        if !walk.traverses(k, j) {
                            found.push(walk.extended(j));
                        }
                        remaining = remaining.saturating_sub(1);
                    }
                }
            }
            by_source.push(found);
        }

        walks = Walks {
            length: step,
            by_source,
        };
        trace!(step, walks = walks.len(), "extended walks");

        if step < length {
            budget = budget.multiply(a);
        }
    }

    debug!(length, walks = walks.len(), "walk enumeration complete");
    Ok(walks)
}

/// Walks of exactly `length` edges starting at `source`.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] for an unknown source and
/// [`GraphError::InvalidWalkLength`] when `length` is zero.
pub fn walks_from(graph: &Graph, source: usize, length: usize) -> Result<Vec<Walk>, GraphError> {
    graph.check_vertex(source)?;
    Ok(walks_of_length(graph, length)?.from(source).to_vec())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
