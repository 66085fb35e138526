//! `mg reach`: reachability and strong connectivity matrices.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use matgraph_analysis::{reachability, strong_connectivity};
use matgraph_core::config::ProjectConfig;
use matgraph_core::matrix::Matrix;

use crate::cmd::source::GraphArgs;
use crate::output::{OutputMode, pretty_section, render_mode, write_matrix};

/// Arguments for `mg reach`.
#[derive(Args, Debug, Default)]
pub struct ReachArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Debug, Serialize)]
struct ReachPayload {
    reachability: Matrix,
    strong_connectivity: Matrix,
}

/// Execute `mg reach`.
pub fn run_reach(
    args: &ReachArgs,
    output: OutputMode,
    config: &ProjectConfig,
) -> anyhow::Result<()> {
    let graph = args.graph.load(config)?;
    let payload = ReachPayload {
        reachability: reachability(&graph),
        strong_connectivity: strong_connectivity(&graph),
    };
    render_mode(
        output,
        &payload,
        |p, w| {
            write_matrix(w, &p.reachability, false)?;
            writeln!(w)?;
            write_matrix(w, &p.strong_connectivity, false)
        },
        |p, w| write_reach_pretty(&p.reachability, &p.strong_connectivity, w),
    )
}

/// Both matrices as labelled sections, shared with `mg report`.
pub fn write_reach_pretty(
    reach: &Matrix,
    strong: &Matrix,
    w: &mut dyn Write,
) -> io::Result<()> {
    pretty_section(w, "Reachability")?;
    write_matrix(w, reach, true)?;
    writeln!(w)?;
    pretty_section(w, "Strong connectivity")?;
    write_matrix(w, strong, true)
}
