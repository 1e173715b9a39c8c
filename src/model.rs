use crate::error::SnapshotError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

/// The model an agent node runs with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub model_name: String,
    pub model_provider: String,
}

impl ModelDescriptor {
    pub fn new(model_name: impl Into<String>, model_provider: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            model_provider: model_provider.into(),
        }
    }
}

/// A resolved per-node model assignment, as sent in a run request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentModelAssignment {
    pub agent_id: String,
    pub model_name: String,
    pub model_provider: String,
}

impl AgentModelAssignment {
    pub fn new(agent_id: impl Into<String>, model: ModelDescriptor) -> Self {
        Self {
            agent_id: agent_id.into(),
            model_name: model.model_name,
            model_provider: model.model_provider,
        }
    }
}

/// Read-only resolver from a node id to the model assigned to it.
///
/// Returning `None` is not an error: nodes that are not agents, or agents that
/// fall back to a flow-wide default, simply have no assignment.
pub trait ModelLookup: Send + Sync {
    fn lookup(&self, node_id: &str) -> Option<ModelDescriptor>;
}

impl<F> ModelLookup for F
where
    F: Fn(&str) -> Option<ModelDescriptor> + Send + Sync,
{
    fn lookup(&self, node_id: &str) -> Option<ModelDescriptor> {
        self(node_id)
    }
}

impl ModelLookup for AHashMap<String, ModelDescriptor> {
    fn lookup(&self, node_id: &str) -> Option<ModelDescriptor> {
        self.get(node_id).cloned()
    }
}

impl ModelLookup for HashMap<String, ModelDescriptor> {
    fn lookup(&self, node_id: &str) -> Option<ModelDescriptor> {
        self.get(node_id).cloned()
    }
}

/// A lookup that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModels;

impl ModelLookup for NoModels {
    fn lookup(&self, _node_id: &str) -> Option<ModelDescriptor> {
        None
    }
}

/// Model assignments of a single flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowModels {
    assignments: AHashMap<String, ModelDescriptor>,
}

impl FlowModels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, node_id: impl Into<String>, model: ModelDescriptor) {
        self.assignments.insert(node_id.into(), model);
    }

    pub fn unassign(&mut self, node_id: &str) -> Option<ModelDescriptor> {
        self.assignments.remove(node_id)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl ModelLookup for FlowModels {
    fn lookup(&self, node_id: &str) -> Option<ModelDescriptor> {
        self.assignments.get(node_id).cloned()
    }
}

/// Per-flow model assignments, keyed by flow id.
///
/// The registry is owned by the caller and handed to the request builder as a
/// read-only [`ModelLookup`] for one flow at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelRegistry {
    flows: AHashMap<String, FlowModels>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `{ "<flow id>": { "<node id>": { "model_name", "model_provider" } } }`.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn assign(
        &mut self,
        flow_id: impl Into<String>,
        node_id: impl Into<String>,
        model: ModelDescriptor,
    ) {
        self.flows
            .entry(flow_id.into())
            .or_default()
            .assign(node_id, model);
    }

    pub fn flow(&self, flow_id: &str) -> Option<&FlowModels> {
        self.flows.get(flow_id)
    }

    /// Lookup for `flow_id`; an unknown flow resolves nothing.
    pub fn lookup_for<'a>(&'a self, flow_id: &str) -> impl ModelLookup + use<'a> {
        let models = self.flows.get(flow_id);
        move |node_id: &str| models.and_then(|m| m.lookup(node_id))
    }

    pub fn remove_flow(&mut self, flow_id: &str) -> Option<FlowModels> {
        self.flows.remove(flow_id)
    }
}
