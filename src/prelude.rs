//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowrun crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowrun::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let snapshot = GraphSnapshot::from_file("path/to/flow.json")?;
//! let registry = ModelRegistry::from_file("path/to/models.json")?;
//!
//! let planner = RunPlanner::builder(snapshot).strict().build();
//! let request = planner.plan("start-node", &registry.lookup_for("flow-1"))?;
//!
//! println!("{}", RequestSummary::format(&request));
//! # Ok(())
//! # }
//! ```

// Graph snapshot and conversion
pub use crate::graph::{Edge, EditorGraph, GraphSnapshot, IntoSnapshot, Node, Position};

// Core operations
pub use crate::reachability::{ReachableSet, Subgraph, compute_reachable, reachable_from};
pub use crate::request::{RunRequest, RunRequestBuilder, build_request};

// Model assignment
pub use crate::model::{
    AgentModelAssignment, FlowModels, ModelDescriptor, ModelLookup, ModelRegistry, NoModels,
};

// Planning and validation
pub use crate::planner::{RunPlanner, RunPlannerBuilder};
pub use crate::validation::{SnapshotIssue, ValidationMode, validate_snapshot};

// Reporting
pub use crate::report::RequestSummary;

// Error types
pub use crate::error::{PlanError, SnapshotError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
