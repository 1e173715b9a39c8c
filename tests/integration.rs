//! Integration tests for flowrun
//!
//! End-to-end tests from an editor export to a finished run request.
//!
mod common;
use common::*;
use flowrun::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn editor_snapshot() -> GraphSnapshot {
        EditorGraph::from_json(EDITOR_FLOW_JSON)
            .expect("Failed to parse editor export")
            .into_snapshot()
            .expect("Failed to convert editor export")
    }

    #[test]
    fn test_editor_export_to_run_request() {
        let registry = ModelRegistry::from_json(MODELS_JSON).expect("Failed to parse models");
        let planner = RunPlanner::builder(editor_snapshot()).build();

        let request = planner
            .plan("start", &registry.lookup_for("flow-1"))
            .expect("Failed to plan run");

        assert_eq!(
            ids(&request.graph_nodes),
            vec!["start", "warren", "cathie", "pm"]
        );
        let edge_ids: Vec<_> = request
            .graph_edges
            .iter()
            .filter_map(|e| e.id.as_deref())
            .collect();
        assert_eq!(edge_ids, vec!["e1", "e2", "e3", "e4"]);

        // `orphan` has a model but is not downstream of `start`.
        assert_eq!(request.agent_models.len(), 1);
        assert_eq!(request.agent_models[0].agent_id, "warren");
        assert!(request.tickers.is_empty());
        assert!(request.model_name.is_none() && request.model_provider.is_none());
    }

    #[test]
    fn test_planning_from_a_middle_node() {
        let planner = RunPlanner::builder(editor_snapshot()).build();

        let subgraph = planner.subgraph("cathie").expect("Failed to plan subgraph");

        assert_eq!(ids(&subgraph.nodes), vec!["cathie", "pm"]);
        assert_eq!(edge_pairs(&subgraph.edges), vec![("cathie", "pm")]);
    }

    #[test]
    fn test_lenient_planner_accepts_missing_start() {
        let snapshot = GraphSnapshot::new(nodes(&["A", "B"]), vec![edge("ghost", "A"), edge("A", "B")]);
        let planner = RunPlanner::builder(snapshot).build();
        assert_eq!(planner.validation(), ValidationMode::Lenient);

        let request = planner.plan("ghost", &NoModels).expect("Lenient mode should not fail");

        assert_eq!(ids(&request.graph_nodes), vec!["A", "B"]);
    }

    #[test]
    fn test_strict_planner_rejects_missing_start() {
        let snapshot = GraphSnapshot::new(nodes(&["A", "B"]), vec![edge("ghost", "A")]);
        let planner = RunPlanner::builder(snapshot).strict().build();

        let result = planner.plan("ghost", &NoModels);

        match result {
            Err(PlanError::Validation(ValidationError::StartNodeMissing {
                start_id,
                referenced_by_edges,
            })) => {
                assert_eq!(start_id, "ghost");
                assert!(referenced_by_edges);
            }
            other => panic!("Expected StartNodeMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_planner_accepts_clean_snapshot() {
        let planner = RunPlanner::builder(create_branching_snapshot())
            .with_validation(ValidationMode::Strict)
            .build();

        let request = planner
            .plan("S", &create_registry().lookup_for("flow-1"))
            .expect("Clean snapshot should pass strict validation");

        assert_eq!(request.graph_nodes.len(), 4);
        assert_eq!(request.agent_models.len(), 2);
    }

    #[test]
    fn test_planner_leaves_snapshot_untouched() {
        let snapshot = create_branching_snapshot();
        let planner = RunPlanner::builder(snapshot.clone())
            .with_validation(ValidationMode::Off)
            .build();

        let _ = planner.plan("S", &NoModels).unwrap();
        let _ = planner.plan("C", &NoModels).unwrap();

        assert_eq!(planner.snapshot(), &snapshot);
    }

    #[test]
    fn test_snapshot_and_registry_from_files() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let snapshot_path = temp_dir.path().join("flow.json");
        let models_path = temp_dir.path().join("models.json");

        let snapshot = create_branching_snapshot();
        fs::write(&snapshot_path, serde_json::to_string(&snapshot).unwrap())
            .expect("Failed to write snapshot");
        fs::write(
            &models_path,
            serde_json::to_string(&create_registry()).unwrap(),
        )
        .expect("Failed to write models");

        let loaded = GraphSnapshot::from_file(&snapshot_path.to_string_lossy())
            .expect("Failed to load snapshot");
        let registry = ModelRegistry::from_file(&models_path.to_string_lossy())
            .expect("Failed to load models");

        assert_eq!(loaded, snapshot);
        assert_eq!(registry, create_registry());

        let request = build_request(loaded.subgraph_from("S"), &registry.lookup_for("flow-2"));
        assert_eq!(request.agent_models.len(), 1);
        assert_eq!(request.agent_models[0].agent_id, "B");

        temp_dir.close().expect("Failed to close temp dir");
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let request = build_request(
            create_branching_snapshot().subgraph_from("S"),
            &create_registry().lookup_for("flow-1"),
        );

        let json = request.to_json_pretty().unwrap();
        let parsed: RunRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, request);
    }
}
