use super::conversion::IntoSnapshot;
use super::definition::{Edge, GraphSnapshot, Node, Position};
use crate::error::SnapshotError;
use serde::Deserialize;
use std::fs;

/// Node as exported by the flow editor.
#[derive(Debug, Deserialize, Clone)]
pub struct EditorNode {
    pub id: String,
    #[serde(rename = "type", default)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub position: Option<EditorPosition>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct EditorPosition {
    pub x: f64,
    pub y: f64,
}

/// Edge as exported by the flow editor.
#[derive(Debug, Deserialize, Clone)]
pub struct EditorEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete editor export (`{"nodes": [...], "edges": [...]}`).
///
/// Editor-only fields such as `selected`, `dragging` or `measured` are ignored.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EditorGraph {
    #[serde(default)]
    pub nodes: Vec<EditorNode>,
    #[serde(default)]
    pub edges: Vec<EditorEdge>,
}

/// Fallback type tag for editor nodes that do not declare one.
pub const DEFAULT_NODE_TYPE: &str = "default";

impl EditorGraph {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads an editor export from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}

impl IntoSnapshot for EditorGraph {
    fn into_snapshot(self) -> Result<GraphSnapshot, SnapshotError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| {
                if node.id.is_empty() {
                    return Err(SnapshotError::ConversionError(
                        "editor node without an id".to_string(),
                    ));
                }
                Ok(Node {
                    id: node.id,
                    node_type: node
                        .node_type
                        .unwrap_or_else(|| DEFAULT_NODE_TYPE.to_string()),
                    data: node.data,
                    position: node
                        .position
                        .map(|p| Position { x: p.x, y: p.y })
                        .unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|edge| Edge {
                id: edge.id,
                source: edge.source,
                target: edge.target,
                source_handle: edge.source_handle,
                target_handle: edge.target_handle,
            })
            .collect();

        Ok(GraphSnapshot { nodes, edges })
    }
}
