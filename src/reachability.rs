//! Reachable-subgraph extraction.
//!
//! Given a flow and the id of the node a run was triggered from, this module
//! works out which nodes the run actually touches: every node that can be
//! reached by following edges forward from the start node. Everything upstream
//! of the start node, and every disconnected island, is left out.
//!
//! The traversal is a depth-first walk over an explicit work-list, so graphs of
//! any depth are handled without growing the call stack.

use crate::graph::{Edge, GraphSnapshot, Node};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The ids reachable from a start node, never including the start id itself.
#[derive(Debug, Clone, Default)]
pub struct ReachableSet {
    ids: AHashSet<String>,
    discovery_order: Vec<String>,
}

impl ReachableSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in the order the depth-first walk first reached them.
    pub fn discovery_order(&self) -> &[String] {
        &self.discovery_order
    }

    fn insert(&mut self, id: &str) {
        if self.ids.insert(id.to_string()) {
            self.discovery_order.push(id.to_string());
        }
    }
}

/// The nodes and edges that take part in a run started from a given node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subgraph {
    /// Start node first (when it exists), then reachable nodes in snapshot order.
    pub nodes: Vec<Node>,
    /// Edges whose endpoints are both in `nodes`, in snapshot order.
    pub edges: Vec<Edge>,
}

impl Subgraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }
}

/// Walks the edge list forward from `start_id` and collects every id it reaches.
///
/// Only edge data is consulted, so the walk works even when `start_id` has no
/// matching node. Cycles, diamonds and self-loops are each expanded once.
pub fn reachable_from(edges: &[Edge], start_id: &str) -> ReachableSet {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut reachable = ReachableSet::default();
    let mut stack = vec![start_id];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if current != start_id {
            trace!(node_id = current, "reached node");
            reachable.insert(current);
        }
        if let Some(targets) = adjacency.get(current) {
            // Pushed in reverse so the first outgoing edge is expanded first.
            stack.extend(targets.iter().rev().copied());
        }
    }

    reachable
}

/// Computes the subgraph a run started at `start_id` covers.
///
/// The start node is emitted first if it is present in `nodes`; a missing start
/// node is simply left out while its downstream nodes are still collected.
/// Edges are kept only when both of their endpoints made it into the node list,
/// which also drops edges that point at ids with no node behind them.
pub fn compute_reachable(nodes: &[Node], edges: &[Edge], start_id: &str) -> Subgraph {
    let reachable = reachable_from(edges, start_id);
    let start_node = nodes.iter().find(|n| n.id == start_id);

    let included_nodes: Vec<Node> = start_node
        .into_iter()
        .chain(nodes.iter().filter(|n| reachable.contains(&n.id)))
        .cloned()
        .collect();

    let included_ids: AHashSet<&str> = included_nodes.iter().map(|n| n.id.as_str()).collect();
    let included_edges: Vec<Edge> = edges
        .iter()
        .filter(|e| {
            included_ids.contains(e.source.as_str()) && included_ids.contains(e.target.as_str())
        })
        .cloned()
        .collect();

    debug!(
        start_id,
        start_present = start_node.is_some(),
        reachable = reachable.len(),
        nodes = included_nodes.len(),
        edges = included_edges.len(),
        "computed reachable subgraph"
    );

    Subgraph {
        nodes: included_nodes,
        edges: included_edges,
    }
}

impl GraphSnapshot {
    /// Shorthand for [`compute_reachable`] over this snapshot.
    pub fn subgraph_from(&self, start_id: &str) -> Subgraph {
        compute_reachable(&self.nodes, &self.edges, start_id)
    }
}
