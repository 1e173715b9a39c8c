use crate::error::PlanError;
use crate::graph::GraphSnapshot;
use crate::model::ModelLookup;
use crate::reachability::{Subgraph, compute_reachable};
use crate::request::{RunRequest, RunRequestBuilder};
use crate::validation::{ValidationMode, enforce};
use tracing::info;

/// Turns a captured graph snapshot into run requests.
///
/// A planner owns one snapshot and can plan any number of runs from it, one per
/// start node. The snapshot is never modified.
pub struct RunPlanner {
    snapshot: GraphSnapshot,
    validation: ValidationMode,
}

pub struct RunPlannerBuilder {
    snapshot: GraphSnapshot,
    validation: ValidationMode,
}

impl RunPlannerBuilder {
    pub fn new(snapshot: GraphSnapshot) -> Self {
        Self {
            snapshot,
            validation: ValidationMode::default(),
        }
    }

    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    pub fn strict(self) -> Self {
        self.with_validation(ValidationMode::Strict)
    }

    pub fn build(self) -> RunPlanner {
        RunPlanner {
            snapshot: self.snapshot,
            validation: self.validation,
        }
    }
}

impl RunPlanner {
    pub fn builder(snapshot: GraphSnapshot) -> RunPlannerBuilder {
        RunPlannerBuilder::new(snapshot)
    }

    pub fn snapshot(&self) -> &GraphSnapshot {
        &self.snapshot
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Extracts the part of the snapshot a run from `start_id` would cover.
    pub fn subgraph(&self, start_id: &str) -> Result<Subgraph, PlanError> {
        enforce(&self.snapshot, start_id, self.validation)?;
        Ok(compute_reachable(
            &self.snapshot.nodes,
            &self.snapshot.edges,
            start_id,
        ))
    }

    /// Plans a complete run request from `start_id`.
    pub fn plan(&self, start_id: &str, lookup: &dyn ModelLookup) -> Result<RunRequest, PlanError> {
        let subgraph = self.subgraph(start_id)?;
        let request = RunRequestBuilder::new(subgraph)
            .with_model_lookup(lookup)
            .build();
        info!(
            start_id,
            nodes = request.graph_nodes.len(),
            edges = request.graph_edges.len(),
            agent_models = request.agent_models.len(),
            "planned run"
        );
        Ok(request)
    }
}
