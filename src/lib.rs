//! # flowrun - Run Request Assembly for Node-Based Flows
//!
//! **flowrun** turns a snapshot of a node/edge flow into the request an execution
//! service needs when a user starts a run from one particular node. Only the part
//! of the flow downstream of that node takes part in the run.
//!
//! ## Core Workflow
//!
//! 1.  **Capture a Snapshot**: Copy the editor's nodes and edges into a `GraphSnapshot`,
//!     either directly, from JSON, or through the `IntoSnapshot` trait for custom formats.
//! 2.  **Extract the Subgraph**: `compute_reachable` walks the edges forward from the
//!     start node and keeps the reachable nodes and the edges between them.
//! 3.  **Assemble the Request**: `RunRequestBuilder` resolves each node's model through a
//!     `ModelLookup` and packages everything into a `RunRequest`.
//!
//! `RunPlanner` chains these steps and can optionally validate the snapshot first.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowrun::prelude::*;
//!
//! let snapshot = GraphSnapshot::new(
//!     vec![
//!         Node::new("start", "input-node"),
//!         Node::new("analyst", "agent-node"),
//!         Node::new("portfolio", "portfolio-manager"),
//!     ],
//!     vec![Edge::new("start", "analyst"), Edge::new("analyst", "portfolio")],
//! );
//!
//! let mut registry = ModelRegistry::new();
//! registry.assign("flow-1", "analyst", ModelDescriptor::new("gpt-4o", "OpenAI"));
//!
//! let subgraph = compute_reachable(&snapshot.nodes, &snapshot.edges, "start");
//! let request = build_request(subgraph, &registry.lookup_for("flow-1"));
//!
//! assert_eq!(request.graph_nodes.len(), 3);
//! assert_eq!(request.agent_models.len(), 1);
//! println!("{}", request.to_json_pretty().unwrap());
//! ```

pub mod error;
pub mod graph;
pub mod model;
pub mod planner;
pub mod prelude;
pub mod reachability;
pub mod report;
pub mod request;
pub mod validation;
