use clap::{Parser, ValueEnum};
use flowrun::prelude::*;
use std::fs;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Input formats the CLI understands.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SnapshotFormat {
    /// `{"nodes": [...], "edges": [...]}` as produced by this crate
    Canonical,
    /// Raw flow-editor export (camelCase handles, optional positions)
    Editor,
}

/// Builds the run request for a flow, starting from one node
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph snapshot JSON file
    snapshot_path: String,

    /// Id of the node the run starts from
    start_id: String,

    /// Optional path to a model registry JSON file
    #[arg(short, long)]
    models: Option<String>,

    /// Flow id to resolve model assignments for
    #[arg(short, long, default_value = "default")]
    flow: String,

    /// Format of the snapshot file
    #[arg(long, value_enum, default_value_t = SnapshotFormat::Canonical)]
    format: SnapshotFormat,

    /// Reject snapshots with a missing start node, duplicate ids or dangling edges
    #[arg(long)]
    strict: bool,

    /// Write the request to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Print a human-readable summary instead of JSON
    #[arg(short, long)]
    summary: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flowrun=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        exit_with_error(&e.to_string());
    }
}

fn run(cli: Cli) -> Result<()> {
    let total_start = Instant::now();

    let snapshot = load_snapshot(&cli.snapshot_path, cli.format)?;
    info!(
        path = %cli.snapshot_path,
        nodes = snapshot.nodes.len(),
        edges = snapshot.edges.len(),
        "loaded snapshot"
    );

    let registry = match &cli.models {
        Some(path) => {
            let registry = ModelRegistry::from_file(path)?;
            if registry.flow(&cli.flow).is_none() {
                info!(flow = %cli.flow, "no model assignments for flow");
            }
            registry
        }
        None => ModelRegistry::new(),
    };

    let mode = if cli.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };
    let planner = RunPlanner::builder(snapshot).with_validation(mode).build();
    let request = planner.plan(&cli.start_id, &registry.lookup_for(&cli.flow))?;

    let rendered = if cli.summary {
        RequestSummary::format(&request)
    } else {
        request.to_json_pretty()?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .map_err(|e| format!("Could not write to file '{}': {}", path, e))?;
            info!(path = %path, "wrote run request");
        }
        None => println!("{}", rendered),
    }

    debug!(elapsed = ?total_start.elapsed(), "done");
    Ok(())
}

fn load_snapshot(path: &str, format: SnapshotFormat) -> Result<GraphSnapshot> {
    let snapshot = match format {
        SnapshotFormat::Canonical => GraphSnapshot::from_file(path)?,
        SnapshotFormat::Editor => EditorGraph::from_file(path)?.into_snapshot()?,
    };
    Ok(snapshot)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
