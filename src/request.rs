use crate::graph::{Edge, Node};
use crate::model::{AgentModelAssignment, ModelLookup};
use crate::reachability::Subgraph;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The payload handed to the execution service when a run is triggered.
///
/// `tickers` is always empty: runs started from a node are driven by the graph
/// content. The flow-wide `model_name`/`model_provider` are always unset so the
/// per-node entries in `agent_models` take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    pub tickers: Vec<String>,
    pub graph_nodes: Vec<Node>,
    pub graph_edges: Vec<Edge>,
    pub agent_models: Vec<AgentModelAssignment>,
    pub model_name: Option<String>,
    pub model_provider: Option<String>,
}

impl RunRequest {
    pub fn builder(subgraph: Subgraph) -> RunRequestBuilder<'static> {
        RunRequestBuilder::new(subgraph)
    }

    /// Model assigned to `agent_id`, if the request carries one.
    pub fn model_for(&self, agent_id: &str) -> Option<&AgentModelAssignment> {
        self.agent_models.iter().find(|a| a.agent_id == agent_id)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Assembles a [`RunRequest`] from a reachable subgraph.
pub struct RunRequestBuilder<'a> {
    subgraph: Subgraph,
    lookup: Option<&'a dyn ModelLookup>,
}

impl<'a> RunRequestBuilder<'a> {
    pub fn new(subgraph: Subgraph) -> Self {
        Self {
            subgraph,
            lookup: None,
        }
    }

    pub fn with_model_lookup<'b>(self, lookup: &'b dyn ModelLookup) -> RunRequestBuilder<'b> {
        RunRequestBuilder {
            subgraph: self.subgraph,
            lookup: Some(lookup),
        }
    }

    pub fn build(self) -> RunRequest {
        let agent_models: Vec<AgentModelAssignment> = match self.lookup {
            Some(lookup) => self
                .subgraph
                .nodes
                .iter()
                .filter_map(|node| {
                    lookup
                        .lookup(&node.id)
                        .map(|model| AgentModelAssignment::new(node.id.clone(), model))
                })
                .collect(),
            None => Vec::new(),
        };

        debug!(
            nodes = self.subgraph.nodes.len(),
            edges = self.subgraph.edges.len(),
            agent_models = agent_models.len(),
            "assembled run request"
        );

        RunRequest {
            tickers: Vec::new(),
            graph_nodes: self.subgraph.nodes,
            graph_edges: self.subgraph.edges,
            agent_models,
            model_name: None,
            model_provider: None,
        }
    }
}

/// Builds the run request for `subgraph`, resolving each node's model through `lookup`.
pub fn build_request(subgraph: Subgraph, lookup: &dyn ModelLookup) -> RunRequest {
    RunRequestBuilder::new(subgraph)
        .with_model_lookup(lookup)
        .build()
}
