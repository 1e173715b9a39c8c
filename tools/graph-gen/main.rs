use clap::Parser;
use flowrun::graph::{Edge, GraphSnapshot, Node};
use flowrun::model::{ModelDescriptor, ModelRegistry};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::json;
use std::fs;

/// A CLI tool to generate random flow snapshots for flowrun
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated snapshot to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Number of nodes, including the start node
    #[arg(long, default_value_t = 50)]
    nodes: usize,

    /// Number of edges
    #[arg(long, default_value_t = 80)]
    edges: usize,

    /// Fraction of nodes that are agents and receive a model assignment
    #[arg(long, default_value_t = 0.6)]
    agent_ratio: f64,

    /// Also write a model registry for the generated agents to this path
    #[arg(long)]
    models_output: Option<String>,

    /// Flow id used in the generated model registry
    #[arg(long, default_value = "default")]
    flow: String,
}

const MODELS: &[(&str, &str)] = &[
    ("gpt-4o", "OpenAI"),
    ("claude-sonnet-4", "Anthropic"),
    ("llama-3.3-70b-versatile", "Groq"),
    ("deepseek-chat", "DeepSeek"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.agent_ratio) {
        eprintln!(
            "Error: --agent-ratio ({}) must be between 0 and 1",
            cli.agent_ratio
        );
        std::process::exit(1);
    }

    println!(
        "Generating flow with {} node(s) and {} edge(s)...",
        cli.nodes, cli.edges
    );

    let nodes = generate_nodes(&mut rng, cli.nodes, cli.agent_ratio);
    let edges = generate_edges(&mut rng, &nodes, cli.edges);
    let snapshot = GraphSnapshot::new(nodes, edges);

    fs::write(&cli.output, serde_json::to_string_pretty(&snapshot)?)?;
    println!("Successfully saved snapshot to '{}'", cli.output);

    if let Some(path) = &cli.models_output {
        let registry = generate_models(&mut rng, &snapshot, &cli.flow);
        fs::write(path, serde_json::to_string_pretty(&registry)?)?;
        println!("Successfully saved model registry to '{}'", path);
    }

    Ok(())
}

/// The first node is always `start`; the rest are agents or plain nodes.
fn generate_nodes(rng: &mut ThreadRng, count: usize, agent_ratio: f64) -> Vec<Node> {
    let mut nodes = vec![Node::new("start", "input-node").at(0.0, 0.0)];
    for i in 1..count {
        let node_type = if rng.random_bool(agent_ratio) {
            "agent-node"
        } else {
            "output-node"
        };
        nodes.push(
            Node::new(format!("node_{}", i), node_type)
                .with_data(json!({ "name": format!("Node {}", i) }))
                .at(
                    rng.random_range(0.0..2000.0),
                    rng.random_range(0.0..2000.0),
                ),
        );
    }
    nodes
}

fn generate_edges(rng: &mut ThreadRng, nodes: &[Node], count: usize) -> Vec<Edge> {
    (0..count)
        .map(|i| {
            let source = &nodes[rng.random_range(0..nodes.len())];
            let target = &nodes[rng.random_range(0..nodes.len())];
            let mut edge = Edge::new(source.id.clone(), target.id.clone());
            edge.id = Some(format!("edge_{}", i));
            edge
        })
        .collect()
}

fn generate_models(rng: &mut ThreadRng, snapshot: &GraphSnapshot, flow: &str) -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    for node in snapshot
        .nodes
        .iter()
        .filter(|n| n.node_type == "agent-node")
    {
        let (name, provider) = MODELS[rng.random_range(0..MODELS.len())];
        registry.assign(flow, node.id.clone(), ModelDescriptor::new(name, provider));
    }
    println!("-> Assigned models to {} agent(s).", registry.flow(flow).map_or(0, |f| f.len()));
    registry
}
