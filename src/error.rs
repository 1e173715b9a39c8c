use thiserror::Error;

/// Errors that can occur while loading or converting a graph snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid custom graph data: {0}")]
    ConversionError(String),
}

/// Structural problems found by the strict validation layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Start node '{start_id}' is not part of the graph snapshot")]
    StartNodeMissing {
        start_id: String,
        referenced_by_edges: bool,
    },

    #[error("Node id '{0}' appears more than once in the graph snapshot")]
    DuplicateNodeId(String),

    #[error("Edge '{source_id}' -> '{target_id}' references unknown node '{missing}'")]
    DanglingEdge {
        source_id: String,
        target_id: String,
        missing: String,
    },
}

/// Errors returned by [`RunPlanner`](crate::planner::RunPlanner).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Graph snapshot rejected: {0}")]
    Validation(#[from] ValidationError),
}
