#![forbid(unsafe_code)]

mod cmd;
mod layout;
mod output;

use std::env;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use matgraph_core::config::resolve_config;
use matgraph_core::{ErrorCode, GraphError};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cmd::source::MatrixFileError;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "mg: adjacency-matrix graph generation and analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Output format (overrides --json, FORMAT and the user config).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Graph",
        about = "Print the adjacency matrix",
        long_about = "Generate (or load) a graph and print its adjacency matrix and fingerprint.",
        after_help = "EXAMPLES:\n    # Generate variant 3213\n    mg generate --variant 3213\n\n    # Custom coefficients, undirected\n    mg generate --variant 3213 --coef 1.0 --coef -0.01 --undirected\n\n    # Load a matrix file\n    mg generate --matrix graph.txt --json"
    )]
    Generate(cmd::generate::GenerateArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Vertex degrees and classification",
        long_about = "Total, out- and in-degrees, regularity, hanging and isolated vertices.",
        after_help = "EXAMPLES:\n    mg degrees --variant 3213\n    mg degrees --variant 3213 --undirected --json"
    )]
    Degrees(cmd::degrees::DegreesArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Walks of exact length",
        long_about = "List walks of exactly L edges that never traverse the same directed edge twice.",
        after_help = "EXAMPLES:\n    # All walks of length 3\n    mg walks --variant 3213 --length 3\n\n    # Only walks starting at vertex 2\n    mg walks --variant 3213 --length 2 --from 2"
    )]
    Walks(cmd::walks::WalksArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Reachability and strong connectivity",
        after_help = "EXAMPLES:\n    mg reach --variant 3213"
    )]
    Reach(cmd::reach::ReachArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Strong components and condensation",
        after_help = "EXAMPLES:\n    mg components --variant 3213 --json"
    )]
    Components(cmd::components::ComponentsArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Full analysis report",
        long_about = "Run every analysis on one graph, optionally including walks of given lengths.",
        after_help = "EXAMPLES:\n    mg report --variant 3213 -l 2 -l 3\n    mg report --matrix graph.json --json"
    )]
    Report(cmd::report::ReportArgs),

    #[command(
        next_help_heading = "Drawing",
        about = "Vertex coordinates for drawing",
        after_help = "EXAMPLES:\n    mg layout --variant 3213 --width 1024 --height 768"
    )]
    Layout(cmd::layout::LayoutArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    mg completions bash\n    mg completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env("MATGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if quiet {
            "error"
        } else if verbose || env::var("DEBUG").is_ok() {
            "matgraph=debug,mg=debug,info"
        } else {
            "matgraph=info,mg=info,warn"
        })
    });

    let format = env::var("MATGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Map a command failure to a structured error with a stable code.
fn classify(err: &anyhow::Error) -> CliError {
    let message = format!("{err:#}");
    if let Some(graph_err) = err.chain().find_map(|e| e.downcast_ref::<GraphError>()) {
        return CliError::with_code(message, graph_err.code());
    }
    if err.chain().any(|e| e.is::<MatrixFileError>()) {
        return CliError::with_code(message, ErrorCode::MatrixParseError);
    }
    CliError::new(message)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let project_root = env::current_dir()?;
    let config = match resolve_config(&project_root, cli.json) {
        Ok(config) => config,
        Err(err) => {
            let output = resolve_output_mode(cli.format, if cli.json { "json" } else { "text" });
            render_error(
                output,
                &CliError::with_code(format!("{err:#}"), ErrorCode::ConfigParseError),
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };
    let output = resolve_output_mode(cli.format, &config.resolved_output);
    debug!(?output, "resolved output mode");

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project = &config.project;
    let command_result = match cli.command {
        Commands::Generate(ref args) => cmd::generate::run_generate(args, output, project),
        Commands::Degrees(ref args) => cmd::degrees::run_degrees(args, output, project),
        Commands::Walks(ref args) => cmd::walks::run_walks(args, output, project),
        Commands::Reach(ref args) => cmd::reach::run_reach(args, output, project),
        Commands::Components(ref args) => cmd::components::run_components(args, output, project),
        Commands::Report(ref args) => cmd::report::run_report(args, output, project),
        Commands::Layout(ref args) => cmd::layout::run_layout(args, output, project),
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    };

    match command_result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            render_error(output, &classify(&err))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
