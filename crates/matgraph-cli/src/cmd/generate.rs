//! `mg generate`: print the adjacency matrix and its fingerprint.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use matgraph_core::config::ProjectConfig;
use matgraph_core::graph::{Graph, MatrixSource, Orientation};
use matgraph_core::matrix::Matrix;

use crate::cmd::source::GraphArgs;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode, write_matrix};

/// Arguments for `mg generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Report payload for `mg generate`.
#[derive(Debug, Serialize)]
pub struct GraphSummary<'a> {
    pub order: usize,
    pub orientation: Orientation,
    pub edge_count: usize,
    pub fingerprint: String,
    pub source: &'a MatrixSource,
    pub matrix: &'a Matrix,
}

impl<'a> GraphSummary<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            order: graph.order(),
            orientation: graph.orientation(),
            edge_count: graph.edge_count(),
            fingerprint: graph.fingerprint(),
            source: graph.source(),
            matrix: graph.adjacency(),
        }
    }
}

/// Execute `mg generate`.
pub fn run_generate(
    args: &GenerateArgs,
    output: OutputMode,
    config: &ProjectConfig,
) -> anyhow::Result<()> {
    let graph = args.graph.load(config)?;
    let summary = GraphSummary::new(&graph);
    render_mode(output, &summary, render_generate_text, render_generate_pretty)
}

fn render_generate_text(summary: &GraphSummary<'_>, w: &mut dyn Write) -> io::Result<()> {
    write_matrix(w, summary.matrix, false)?;
    writeln!(w, "fingerprint {}", summary.fingerprint)
}

fn render_generate_pretty(summary: &GraphSummary<'_>, w: &mut dyn Write) -> io::Result<()> {
    write_graph_header(summary, w)?;
    writeln!(w)?;
    pretty_section(w, "Adjacency matrix")?;
    write_matrix(w, summary.matrix, true)
}

/// Key/value block describing a graph, shared with `mg report`.
pub fn write_graph_header(summary: &GraphSummary<'_>, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Graph")?;
    pretty_kv(w, "Order", summary.order.to_string())?;
    pretty_kv(
        w,
        "Orientation",
        if summary.orientation.is_directed() {
            "directed"
        } else {
            "undirected"
        },
    )?;
    pretty_kv(w, "Edges", summary.edge_count.to_string())?;
    let source = match summary.source {
        MatrixSource::Seeded {
            variant,
            coefficients,
            ..
        } => format!("variant {variant} (coefficients {coefficients:?})"),
        MatrixSource::Supplied => "supplied matrix".to_string(),
    };
    pretty_kv(w, "Source", source)?;
    pretty_kv(w, "Fingerprint", &summary.fingerprint)
}
