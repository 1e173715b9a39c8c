//! Common test utilities for building graph snapshots and model lookups.
use flowrun::prelude::*;
use serde_json::json;

/// Creates a node whose type is derived from its id: `S` is the input node,
/// anything else is an agent.
#[allow(dead_code)]
pub fn node(id: &str) -> Node {
    let node_type = if id == "S" { "input-node" } else { "agent-node" };
    Node::new(id, node_type).with_data(json!({ "name": format!("{} node", id) }))
}

#[allow(dead_code)]
pub fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| node(id)).collect()
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> Edge {
    Edge::new(source, target)
}

#[allow(dead_code)]
pub fn ids(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(|n| n.id.as_str()).collect()
}

#[allow(dead_code)]
pub fn edge_pairs(edges: &[Edge]) -> Vec<(&str, &str)> {
    edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect()
}

/// Creates a branching flow:
///
/// ```text
/// U -> S -> A -> B
///      S -> C -> A
///      D -> B         (D is not reachable from S)
/// ```
#[allow(dead_code)]
pub fn create_branching_snapshot() -> GraphSnapshot {
    GraphSnapshot::new(
        nodes(&["U", "S", "A", "B", "C", "D"]),
        vec![
            edge("U", "S"),
            edge("S", "A"),
            edge("A", "B"),
            edge("S", "C"),
            edge("C", "A"),
            edge("D", "B"),
        ],
    )
}

/// Creates a registry where flow `flow-1` assigns models to `A` and `C`.
#[allow(dead_code)]
pub fn create_registry() -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    registry.assign("flow-1", "A", ModelDescriptor::new("gpt-4o", "OpenAI"));
    registry.assign(
        "flow-1",
        "C",
        ModelDescriptor::new("claude-sonnet-4", "Anthropic"),
    );
    registry.assign("flow-2", "B", ModelDescriptor::new("deepseek-chat", "DeepSeek"));
    registry
}

/// The same flow as an editor export, camelCase keys and editor-only fields included.
#[allow(dead_code)]
pub const EDITOR_FLOW_JSON: &str = r#"
{
  "nodes": [
    { "id": "start", "type": "input-node", "position": { "x": 0, "y": 0 },
      "data": { "name": "Stock Input" }, "selected": true },
    { "id": "warren", "type": "agent-node", "position": { "x": 300, "y": -120 },
      "data": { "name": "Warren Buffett" } },
    { "id": "cathie", "type": "agent-node", "position": { "x": 300, "y": 120 },
      "data": { "name": "Cathie Wood" } },
    { "id": "pm", "type": "portfolio-manager-node", "position": { "x": 600, "y": 0 },
      "data": { "name": "Portfolio Manager" } },
    { "id": "orphan", "position": { "x": 900, "y": 400 } }
  ],
  "edges": [
    { "id": "e1", "source": "start", "target": "warren", "sourceHandle": "out", "targetHandle": "in" },
    { "id": "e2", "source": "start", "target": "cathie" },
    { "id": "e3", "source": "warren", "target": "pm" },
    { "id": "e4", "source": "cathie", "target": "pm" },
    { "id": "e5", "source": "orphan", "target": "pm" }
  ]
}
"#;

#[allow(dead_code)]
pub const MODELS_JSON: &str = r#"
{
  "flow-1": {
    "warren": { "model_name": "gpt-4o", "model_provider": "OpenAI" },
    "orphan": { "model_name": "deepseek-chat", "model_provider": "DeepSeek" }
  }
}
"#;
