use crate::error::ValidationError;
use crate::graph::GraphSnapshot;
use ahash::AHashSet;
use itertools::Itertools;
use tracing::warn;

/// A structural finding about a snapshot. Shares its shape with the strict-mode error.
pub type SnapshotIssue = ValidationError;

/// How a [`RunPlanner`](crate::planner::RunPlanner) treats snapshot issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Skip validation entirely.
    Off,
    /// Log every issue and carry on with the run.
    #[default]
    Lenient,
    /// Refuse to plan a run when any issue is found.
    Strict,
}

/// Checks the snapshot for structural problems that would silently shrink a run.
///
/// Issues are reported in a stable order: the start node first, then duplicate
/// ids in snapshot order, then dangling edges in snapshot order.
pub fn validate_snapshot(snapshot: &GraphSnapshot, start_id: &str) -> Vec<SnapshotIssue> {
    let mut issues = Vec::new();
    let known_ids: AHashSet<&str> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();

    if !known_ids.contains(start_id) {
        issues.push(ValidationError::StartNodeMissing {
            start_id: start_id.to_string(),
            referenced_by_edges: snapshot
                .edges
                .iter()
                .any(|e| e.source == start_id || e.target == start_id),
        });
    }

    issues.extend(
        snapshot
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .duplicates()
            .map(|id| ValidationError::DuplicateNodeId(id.to_string())),
    );

    for edge in &snapshot.edges {
        let missing = [edge.source.as_str(), edge.target.as_str()]
            .into_iter()
            .filter(|id| !known_ids.contains(id))
            .unique();
        for id in missing {
            issues.push(ValidationError::DanglingEdge {
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
                missing: id.to_string(),
            });
        }
    }

    issues
}

/// Applies `mode` to the snapshot, returning the first issue in strict mode.
pub fn enforce(
    snapshot: &GraphSnapshot,
    start_id: &str,
    mode: ValidationMode,
) -> Result<(), ValidationError> {
    if mode == ValidationMode::Off {
        return Ok(());
    }

    let issues = validate_snapshot(snapshot, start_id);
    match mode {
        ValidationMode::Strict => match issues.into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        },
        _ => {
            for issue in &issues {
                warn!(start_id, "{}", issue);
            }
            Ok(())
        }
    }
}
