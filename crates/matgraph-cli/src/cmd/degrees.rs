//! `mg degrees`: vertex degrees and degree-based classification.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use matgraph_analysis::DegreeSummary;
use matgraph_core::config::ProjectConfig;
use matgraph_core::graph::Orientation;

use crate::cmd::source::GraphArgs;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode, vertex_labels};

/// Arguments for `mg degrees`.
#[derive(Args, Debug, Default)]
pub struct DegreesArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Debug, Serialize)]
struct DegreesPayload {
    orientation: Orientation,
    #[serde(flatten)]
    summary: DegreeSummary,
}

/// Execute `mg degrees`.
pub fn run_degrees(
    args: &DegreesArgs,
    output: OutputMode,
    config: &ProjectConfig,
) -> anyhow::Result<()> {
    let graph = args.graph.load(config)?;
    let payload = DegreesPayload {
        orientation: graph.orientation(),
        summary: DegreeSummary::from_graph(&graph),
    };
    render_mode(
        output,
        &payload,
        |p, w| write_degrees_text(&p.summary, w),
        |p, w| write_degrees_pretty(&p.summary, w),
    )
}

/// One row per vertex: `label degree [out in]`, then classification lines.
pub fn write_degrees_text(summary: &DegreeSummary, w: &mut dyn Write) -> io::Result<()> {
    for (v, degree) in summary.degrees.iter().enumerate() {
        match (&summary.out_degrees, &summary.in_degrees) {
            (Some(out), Some(inn)) => writeln!(w, "{} {degree} {} {}", v + 1, out[v], inn[v])?,
            _ => writeln!(w, "{} {degree}", v + 1)?,
        }
    }
    writeln!(w, "regular {}", regularity_label(summary))?;
    writeln!(w, "hanging {}", vertex_labels(&summary.hanging))?;
    writeln!(w, "isolated {}", vertex_labels(&summary.isolated))
}

/// Degree table and classification, shared with `mg report`.
pub fn write_degrees_pretty(summary: &DegreeSummary, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Degrees")?;
    let directed = summary.out_degrees.is_some();
    if directed {
        writeln!(w, "{:>6}  {:>6}  {:>6}  {:>6}", "vertex", "deg", "out", "in")?;
    } else {
        writeln!(w, "{:>6}  {:>6}", "vertex", "deg")?;
    }
    for (v, degree) in summary.degrees.iter().enumerate() {
        match (&summary.out_degrees, &summary.in_degrees) {
            (Some(out), Some(inn)) => {
                writeln!(w, "{:>6}  {degree:>6}  {:>6}  {:>6}", v + 1, out[v], inn[v])?;
            }
            _ => writeln!(w, "{:>6}  {degree:>6}", v + 1)?,
        }
    }
    writeln!(w)?;
    pretty_kv(w, "Regular", regularity_label(summary))?;
    pretty_kv(w, "Hanging", vertex_labels(&summary.hanging))?;
    pretty_kv(w, "Isolated", vertex_labels(&summary.isolated))
}

fn regularity_label(summary: &DegreeSummary) -> String {
    summary
        .regularity
        .map_or_else(|| "no".to_string(), |degree| format!("yes ({degree})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matgraph_core::graph::Graph;
    use matgraph_core::matrix::Matrix;

    fn summary(rows: &[&[i64]], orientation: Orientation) -> DegreeSummary {
        let graph = Graph::from_matrix(Matrix::from_rows(rows).expect("square"), orientation)
            .expect("non-empty");
        DegreeSummary::from_graph(&graph)
    }

    #[test]
    fn text_rows_are_one_based() {
        let s = summary(&[&[0, 1], &[0, 0]], Orientation::Directed);
        let mut buf = Vec::new();
        write_degrees_text(&s, &mut buf).expect("render");
        let out = String::from_utf8(buf).expect("utf-8");
        assert_eq!(
            out,
            "1 1 1 0\n2 1 0 1\nregular yes (1)\nhanging 1 2\nisolated -\n"
        );
    }

    #[test]
    fn undirected_pretty_omits_half_degrees() {
        let s = summary(&[&[1]], Orientation::Undirected);
        let mut buf = Vec::new();
        write_degrees_pretty(&s, &mut buf).expect("render");
        let out = String::from_utf8(buf).expect("utf-8");
        assert!(!out.contains("out"));
        assert!(out.contains("Isolated:"));
        assert!(out.lines().any(|l| l.starts_with("Isolated:") && l.ends_with(" 1")));
    }
}
