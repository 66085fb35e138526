//! `mg walks`: walks of exact length without a repeated edge.

use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use matgraph_analysis::{Walk, Walks, walks_from, walks_of_length};
use matgraph_core::config::ProjectConfig;

use crate::cmd::source::GraphArgs;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `mg walks`.
#[derive(Args, Debug)]
pub struct WalksArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Number of edges in each walk.
    #[arg(short, long, default_value_t = 2)]
    pub length: usize,

    /// Only list walks starting at this vertex (1-based, as printed).
    #[arg(long, value_name = "VERTEX")]
    pub from: Option<usize>,
}

#[derive(Debug, Serialize)]
struct WalksPayload {
    length: usize,
    count: usize,
    walks: Vec<Walk>,
}

/// Execute `mg walks`.
pub fn run_walks(
    args: &WalksArgs,
    output: OutputMode,
    config: &ProjectConfig,
) -> anyhow::Result<()> {
    let graph = args.graph.load(config)?;

    let walks = match args.from {
        Some(label) => {
            let source = label.checked_sub(1).context("vertex labels start at 1")?;
            walks_from(&graph, source, args.length)?
        }
        None => walks_of_length(&graph, args.length)?.iter().cloned().collect(),
    };

    let payload = WalksPayload {
        length: args.length,
        count: walks.len(),
        walks,
    };
    render_mode(
        output,
        &payload,
        |p, w| write_walk_lines(&p.walks, w),
        |p, w| {
            pretty_section(w, &format!("Walks of length {} ({} found)", p.length, p.count))?;
            write_walks_grouped(&p.walks, w)
        },
    )
}

/// `1 -> 2 -> 3` with 1-based labels.
pub fn walk_label(walk: &Walk) -> String {
    walk.vertices()
        .iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn write_walk_lines(walks: &[Walk], w: &mut dyn Write) -> io::Result<()> {
    for walk in walks {
        let labels: Vec<String> = walk.vertices().iter().map(|v| (v + 1).to_string()).collect();
        writeln!(w, "{}", labels.join(" "))?;
    }
    Ok(())
}

fn write_walks_grouped(walks: &[Walk], w: &mut dyn Write) -> io::Result<()> {
    let mut current = None;
    for walk in walks {
        if current != Some(walk.source()) {
            current = Some(walk.source());
            writeln!(w, "From {}:", walk.source() + 1)?;
        }
        writeln!(w, "  {}", walk_label(walk))?;
    }
    Ok(())
}

/// Pretty block for one walk length, shared with `mg report`.
pub fn write_walks_pretty(walks: &Walks, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(
        w,
        &format!("Walks of length {} ({} found)", walks.length(), walks.len()),
    )?;
    let all: Vec<Walk> = walks.iter().cloned().collect();
    write_walks_grouped(&all, w)
}
