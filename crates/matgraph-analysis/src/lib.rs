#![forbid(unsafe_code)]
//! matgraph-analysis library.
//!
//! Read-only analyses over a [`matgraph_core::Graph`]: vertex degrees,
//! walk enumeration, reachability, strong connectivity, components and
//! the condensation graph.
//!
//! Every operation takes `&Graph` and returns freshly allocated results.
//! Nothing here mutates or caches on the graph; [`report::GraphReport`]
//! shares intermediates across a single run instead.
//!
//! # Conventions
//!
//! - **Edges**: an adjacency entry is an edge only when it equals `1`.
//! - **Errors**: [`matgraph_core::GraphError`] for invalid arguments.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`) and
//!   `#[instrument]` on the heavier operations.

pub mod components;
pub mod degree;
pub mod reach;
pub mod report;
pub mod walks;

pub use components::{Component, Condensation, condensation, connected_components};
pub use degree::{
    DegreeSummary, hanging_vertices, isolated_vertices, negative_half_degree,
    positive_half_degree, regularity_degree, vertex_degree,
};
pub use reach::{reachability, strong_connectivity};
pub use report::GraphReport;
pub use walks::{Walk, Walks, one_step_walks, walks_from, walks_of_length};
