use std::path::PathBuf;
use std::sync::Arc;

use relief_workflow::api::graph_dto::WorkflowGraphDto;
use relief_workflow::build_workflow;
use relief_workflow::domain::allocation::provider_trait::CandidateProviders;
use relief_workflow::domain::model::types::ResourceType;
use relief_workflow::domain::workflow::graph::WorkflowGraph;
use relief_workflow::domain::workflow::router::Target;
use relief_workflow::domain::workflow::stage_registry::{Collaborators, StageRegistry};
use relief_workflow::domain::workflow::stages::offline::{NearestDisasterMatcher, PassthroughExtractor, UnavailablePlanner};
use relief_workflow::domain::workflow::workflow_state::WorkflowState;
use relief_workflow::error::{ConversionError, Error};
use relief_workflow::loader::candidate_pool::CandidatePool;
use relief_workflow::loader::parser::parse_json_file;
use relief_workflow::report::write_task_allocations;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/data").join(name)
}

fn collaborators() -> Collaborators {
    let pool = Arc::new(CandidatePool::from_file(data_file("candidates.json")).unwrap());
    Collaborators {
        extractor: Arc::new(PassthroughExtractor),
        directory: pool.clone(),
        matcher: Arc::new(NearestDisasterMatcher),
        planner: Arc::new(UnavailablePlanner),
        candidates: CandidateProviders::from_single(pool),
    }
}

fn graph_from_json(json: &str) -> Result<WorkflowGraph, Error> {
    let dto: WorkflowGraphDto = serde_json::from_str(json).unwrap();
    WorkflowGraph::from_dto(dto, &StageRegistry::from_collaborators(collaborators()))
}

#[test]
fn configured_graph_matches_the_standard_graph() {
    let registry = StageRegistry::from_collaborators(collaborators());
    let dto: WorkflowGraphDto = parse_json_file(data_file("workflow_graph.json")).unwrap();

    let configured = WorkflowGraph::from_dto(dto, &registry).unwrap();
    let standard = WorkflowGraph::standard(&registry).unwrap();

    assert_eq!(configured.len(), standard.len());
    assert_eq!(configured.max_steps(), 25);
    for state in [
        WorkflowState::default(),
        serde_json::from_str(r#"{"next_action": "request_extraction"}"#).unwrap(),
        serde_json::from_str(r#"{"next_action": "incident_assignment"}"#).unwrap(),
        serde_json::from_str(r#"{"next_action": "task_allocation"}"#).unwrap(),
    ] {
        let configured_target = configured.route_from_start(&state);
        let standard_target = standard.route_from_start(&state);
        let name = |graph: &WorkflowGraph, target: Target| match target {
            Target::Node(key) => graph.node_name(key).map(|n| n.to_string()),
            Target::End => None,
        };
        assert_eq!(name(&configured, configured_target), name(&standard, standard_target));
    }
}

#[test]
fn sample_state_allocates_from_the_candidate_pool() {
    let executor = build_workflow(Some(data_file("workflow_graph.json").as_path()), collaborators()).unwrap();
    let state: WorkflowState = parse_json_file(data_file("state_allocation.json")).unwrap();

    let state = executor.run(state).unwrap();
    let allocations = state.task_allocations.as_ref().unwrap();

    // Water: the nearer volunteer stock first, the admin stock tops up.
    let water: Vec<(String, i64)> =
        allocations[0].resource_allocations.iter().map(|a| (a.resource.donor_id.to_string(), a.resource.quantity)).collect();
    assert_eq!(water, vec![("vol-2".to_string(), 50), ("admin-1".to_string(), 10)]);
    assert_eq!(allocations[0].volunteer_allocations[0].volunteer.id.as_str(), "vol-1");

    // The only vehicle is in use and vol-1 is taken, so the second task is short.
    assert_eq!(allocations[1].allocated_quantity(ResourceType::Food), 5);
    assert_eq!(allocations[1].allocated_quantity(ResourceType::Vehicle), 0);
    let second: Vec<&str> = allocations[1].volunteer_allocations.iter().map(|a| a.volunteer.id.as_str()).collect();
    assert_eq!(second, vec!["vol-2"]);
    assert_eq!(allocations[1].shortfalls().len(), 2);

    let mut report = Vec::new();
    let origin = state.disaster.as_ref().and_then(|d| d.disaster_coordinates.as_ref());
    write_task_allocations(&mut report, origin, allocations).unwrap();
    assert_eq!(String::from_utf8(report).unwrap().lines().count(), 1 + 3 + 1 + 1);
}

#[test]
fn new_request_without_planner_ends_after_task_creation() {
    let executor = build_workflow(None, collaborators()).unwrap();
    let state: WorkflowState = serde_json::from_str(
        r#"{
            "next_action": "request_extraction",
            "request": {"coordinates": {"lat": 6.93, "lng": 79.87}, "disaster_type": "flood"}
        }"#,
    )
    .unwrap();

    let state = executor.run(state).unwrap();

    assert_eq!(state.disaster.map(|d| d.disaster_id.to_string()), Some("flood-colombo".to_string()));
    assert_eq!(state.tasks, Some(vec![]));
    assert!(state.task_allocations.is_none());
}

#[test]
fn unknown_stage_kind_is_rejected() {
    let result = graph_from_json(
        r#"{"nodes": [{"name": "agent_orchestrator", "stage": "orchestrator"}],
            "edges": [{"type": "direct", "from": "start", "to": "agent_orchestrator"}]}"#,
    );

    assert!(matches!(result, Err(Error::ConversionError(ConversionError::UnknownStageKind(kind))) if kind == "orchestrator"));
}

#[test]
fn unknown_action_key_is_rejected() {
    let result = graph_from_json(
        r#"{"nodes": [{"name": "agent_intake", "stage": "agent_intake"}],
            "edges": [
                {"type": "conditional", "from": "start", "to": {"request_extraction": "agent_intake", "celebrate": "__end__"}},
                {"type": "direct", "from": "agent_intake", "to": "__end__"}
            ]}"#,
    );

    assert!(matches!(result, Err(Error::ConversionError(ConversionError::UnknownAction(action))) if action == "celebrate"));
}

#[test]
fn max_steps_is_read_from_the_file() {
    let graph = graph_from_json(
        r#"{"maxSteps": 4,
            "nodes": [{"name": "agent_allocation", "stage": "allocation"}],
            "edges": [
                {"type": "direct", "from": "start", "to": "agent_allocation"},
                {"type": "direct", "from": "agent_allocation", "to": "__end__"}
            ]}"#,
    )
    .unwrap();

    assert_eq!(graph.max_steps(), 4);
}

#[test]
fn missing_graph_file_is_an_io_error() {
    let result = build_workflow(Some(data_file("does_not_exist.json").as_path()), collaborators());
    assert!(matches!(result, Err(Error::IoError(_))));
}
