use super::definition::GraphSnapshot;
use crate::error::SnapshotError;

/// A trait for custom graph formats that can be converted into a `GraphSnapshot`.
///
/// This is the extension point that keeps the reachability core independent of
/// any particular editor. Implement it on the structs your editor exports and
/// hand the result to [`compute_reachable`](crate::reachability::compute_reachable)
/// or a [`RunPlanner`](crate::planner::RunPlanner).
///
/// # Example
///
/// ```rust,no_run
/// use flowrun::prelude::*;
/// use flowrun::error::SnapshotError;
///
/// struct MyStep { name: String, next: Vec<String> }
/// struct MyPipeline { steps: Vec<MyStep> }
///
/// impl IntoSnapshot for MyPipeline {
///     fn into_snapshot(self) -> std::result::Result<GraphSnapshot, SnapshotError> {
///         let mut snapshot = GraphSnapshot::default();
///         for step in self.steps {
///             for next in &step.next {
///                 snapshot.edges.push(Edge::new(step.name.clone(), next.clone()));
///             }
///             snapshot.nodes.push(Node::new(step.name, "step"));
///         }
///         Ok(snapshot)
///     }
/// }
/// ```
pub trait IntoSnapshot {
    /// Consumes the object and converts it into a graph snapshot.
    fn into_snapshot(self) -> Result<GraphSnapshot, SnapshotError>;
}

impl IntoSnapshot for GraphSnapshot {
    fn into_snapshot(self) -> Result<GraphSnapshot, SnapshotError> {
        Ok(self)
    }
}
