//! `mg report`: every analysis of one graph in a single document.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use matgraph_analysis::GraphReport;
use matgraph_core::config::ProjectConfig;
use matgraph_core::graph::MatrixSource;
use matgraph_core::matrix::Matrix;

use crate::cmd::components::write_components_pretty;
use crate::cmd::degrees::write_degrees_pretty;
use crate::cmd::generate::{GraphSummary, write_graph_header};
use crate::cmd::reach::write_reach_pretty;
use crate::cmd::source::GraphArgs;
use crate::cmd::walks::write_walks_pretty;
use crate::output::{OutputMode, pretty_section, render_mode, vertex_labels, write_matrix};

/// Arguments for `mg report`.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Include walks of this length; repeat for several lengths.
    #[arg(short = 'l', long = "walk-length", value_name = "L")]
    pub walk_lengths: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct ReportPayload<'a> {
    source: &'a MatrixSource,
    adjacency: &'a Matrix,
    #[serde(flatten)]
    report: GraphReport,
}

/// Execute `mg report`.
pub fn run_report(
    args: &ReportArgs,
    output: OutputMode,
    config: &ProjectConfig,
) -> anyhow::Result<()> {
    let graph = args.graph.load(config)?;
    let report = GraphReport::from_graph(&graph, &args.walk_lengths)?;
    let summary = GraphSummary::new(&graph);
    let payload = ReportPayload {
        source: graph.source(),
        adjacency: graph.adjacency(),
        report,
    };

    render_mode(
        output,
        &payload,
        |p, w| write_report_text(&p.report, w),
        |p, w| write_report_pretty(&summary, &p.report, w),
    )
}

fn write_report_text(report: &GraphReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "order {}", report.order)?;
    writeln!(w, "edges {}", report.edge_count)?;
    writeln!(w, "fingerprint {}", report.fingerprint)?;
    writeln!(
        w,
        "degrees {}",
        report
            .degrees
            .degrees
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    )?;
    writeln!(w, "hanging {}", vertex_labels(&report.degrees.hanging))?;
    writeln!(w, "isolated {}", vertex_labels(&report.degrees.isolated))?;
    writeln!(w, "components {}", report.condensation.components.len())?;
    for walks in &report.walks {
        writeln!(w, "walks {} {}", walks.length(), walks.len())?;
    }
    writeln!(w, "reachability")?;
    write_matrix(w, &report.reachability, false)?;
    writeln!(w, "condensation")?;
    write_matrix(w, &report.condensation.matrix, false)
}

fn write_report_pretty(
    summary: &GraphSummary<'_>,
    report: &GraphReport,
    w: &mut dyn Write,
) -> io::Result<()> {
    write_graph_header(summary, w)?;
    writeln!(w)?;
    pretty_section(w, "Adjacency matrix")?;
    write_matrix(w, summary.matrix, true)?;
    writeln!(w)?;
    write_degrees_pretty(&report.degrees, w)?;
    writeln!(w)?;
    write_reach_pretty(&report.reachability, &report.strong_connectivity, w)?;
    writeln!(w)?;
    write_components_pretty(&report.condensation, w)?;
    for walks in &report.walks {
        writeln!(w)?;
        write_walks_pretty(walks, w)?;
    }
    Ok(())
}
