//! Combined analysis report.
//!
//! [`GraphReport`] runs every analysis once over a single graph and shares
//! the intermediate matrices: reachability feeds strong connectivity, which
//! feeds the component partition, which feeds the condensation.

use serde::Serialize;
use tracing::instrument;

use matgraph_core::error::GraphError;
use matgraph_core::graph::{Graph, Orientation};
use matgraph_core::matrix::Matrix;

use crate::components::{Condensation, components_from_strong, condense};
use crate::degree::DegreeSummary;
use crate::reach::{reachability, strong_from_reachability};
use crate::walks::{Walks, walks_of_length};

/// Every derived property of one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    pub order: usize,
    pub orientation: Orientation,
    pub fingerprint: String,
    pub edge_count: usize,
    pub degrees: DegreeSummary,
    pub reachability: Matrix,
    pub strong_connectivity: Matrix,
    pub condensation: Condensation,
    pub walks: Vec<Walks>,
}

impl GraphReport {
    /// Analyze `graph`, enumerating walks for each of `walk_lengths`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidWalkLength`] if any requested length is
    /// zero.
    #[instrument(skip(graph), fields(order = graph.order()))]
    pub fn from_graph(graph: &Graph, walk_lengths: &[usize]) -> Result<Self, GraphError> {
        let walks = walk_lengths
            .iter()
            .map(|&length| walks_of_length(graph, length))
            .collect::<Result<Vec<_>, _>>()?;

        let reachability = reachability(graph);
        let strong_connectivity = strong_from_reachability(&reachability);
        let condensation = condense(graph, components_from_strong(&strong_connectivity));

        Ok(Self {
            order: graph.order(),
            orientation: graph.orientation(),
            fingerprint: graph.fingerprint(),
            edge_count: graph.edge_count(),
            degrees: DegreeSummary::from_graph(graph),
            reachability,
            strong_connectivity,
            condensation,
            walks,
        })
    }
}
