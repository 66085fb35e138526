//! `mg layout`: drawing coordinates for each vertex.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use matgraph_core::config::ProjectConfig;

use crate::cmd::source::GraphArgs;
use crate::layout::{Point, layout_points};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `mg layout`.
#[derive(Args, Debug, Default)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Surface width (default from `[layout] width`).
    #[arg(long)]
    pub width: Option<f32>,

    /// Surface height (default from `[layout] height`).
    #[arg(long)]
    pub height: Option<f32>,
}

#[derive(Debug, Serialize)]
struct LayoutPayload {
    width: f32,
    height: f32,
    points: Vec<Point>,
}

/// Execute `mg layout`.
pub fn run_layout(
    args: &LayoutArgs,
    output: OutputMode,
    config: &ProjectConfig,
) -> anyhow::Result<()> {
    let graph = args.graph.load(config)?;
    let width = args.width.unwrap_or(config.layout.width);
    let height = args.height.unwrap_or(config.layout.height);
    if !(width > 0.0 && height > 0.0) {
        anyhow::bail!("surface size must be positive, got {width} x {height}");
    }

    let payload = LayoutPayload {
        width,
        height,
        points: layout_points(graph.order(), width, height),
    };
    render_mode(output, &payload, write_layout_text, write_layout_pretty)
}

fn write_layout_text(payload: &LayoutPayload, w: &mut dyn Write) -> io::Result<()> {
    for (v, p) in payload.points.iter().enumerate() {
        writeln!(w, "{} {:.2} {:.2}", v + 1, p.x, p.y)?;
    }
    Ok(())
}

fn write_layout_pretty(payload: &LayoutPayload, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Layout")?;
    pretty_kv(w, "Surface", format!("{} x {}", payload.width, payload.height))?;
    writeln!(w)?;
    for (v, p) in payload.points.iter().enumerate() {
        writeln!(w, "{:>4}  ({:>8.2}, {:>8.2})", v + 1, p.x, p.y)?;
    }
    Ok(())
}
