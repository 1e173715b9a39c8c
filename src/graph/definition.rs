use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Canvas coordinates of a node. Carried through to the run request untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single node of the flow as captured at trigger time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub position: Position,
}

/// A directed connection from `source` to `target`.
///
/// Parallel edges between the same pair of nodes are legal and are kept as
/// separate entries everywhere in this crate. Handles keep the editor's
/// `sourceHandle`/`targetHandle` names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(
        default,
        rename = "sourceHandle",
        alias = "source_handle",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
    #[serde(
        default,
        rename = "targetHandle",
        alias = "target_handle",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_handle: Option<String>,
}

/// An immutable copy of the editor's nodes and edges, taken in one go when a
/// run is triggered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Node {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            data: serde_json::Value::Null,
            position: Position::default(),
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }
}

impl Edge {
    /// Creates a bare edge without editor metadata.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: None,
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Parses a snapshot from its canonical JSON form.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
