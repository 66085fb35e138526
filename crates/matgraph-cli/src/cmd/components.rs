//! `mg components`: strongly connected components and the condensation.

use std::io::{self, Write};

use clap::Args;

use matgraph_analysis::{Condensation, condensation};
use matgraph_core::config::ProjectConfig;

use crate::cmd::source::GraphArgs;
use crate::output::{OutputMode, pretty_section, render_mode, vertex_labels, write_matrix};

/// Arguments for `mg components`.
#[derive(Args, Debug, Default)]
pub struct ComponentsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Execute `mg components`.
pub fn run_components(
    args: &ComponentsArgs,
    output: OutputMode,
    config: &ProjectConfig,
) -> anyhow::Result<()> {
    let graph = args.graph.load(config)?;
    let condensed = condensation(&graph);
    render_mode(output, &condensed, write_components_text, write_components_pretty)
}

fn write_components_text(condensed: &Condensation, w: &mut dyn Write) -> io::Result<()> {
    for component in &condensed.components {
        writeln!(w, "{}", vertex_labels(component.members()))?;
    }
    writeln!(w)?;
    write_matrix(w, &condensed.matrix, false)
}

/// Component list and condensation matrix, shared with `mg report`.
pub fn write_components_pretty(condensed: &Condensation, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(
        w,
        &format!("Strong components ({})", condensed.components.len()),
    )?;
    for (idx, component) in condensed.components.iter().enumerate() {
        writeln!(w, "K{:<4} {{{}}}", idx + 1, member_list(component.members()))?;
    }
    writeln!(w)?;
    pretty_section(w, "Condensation")?;
    write_matrix(w, &condensed.matrix, true)
}

fn member_list(members: &[usize]) -> String {
    members
        .iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
