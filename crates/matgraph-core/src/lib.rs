#![forbid(unsafe_code)]
//! matgraph-core library.
//!
//! Dense adjacency matrices, the immutable [`graph::Graph`] model, and the
//! deterministic generator that derives a graph from a variant identifier.
//!
//! # Conventions
//!
//! - **Errors**: [`error::GraphError`] for caller-supplied input; `anyhow::Result`
//!   for configuration loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod rng;
pub mod variant;

pub use error::{ErrorCode, GraphError};
pub use graph::{Graph, MatrixSource, Orientation};
pub use matrix::Matrix;
