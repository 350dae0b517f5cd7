use std::path::Path;

use crate::api::graph_dto::WorkflowGraphDto;
use crate::domain::workflow::executor::GraphExecutor;
use crate::domain::workflow::graph::WorkflowGraph;
use crate::domain::workflow::stage_registry::{Collaborators, StageRegistry};
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod report;

/// Builds a workflow executor from a graph configuration file, or from the
/// standard graph when no file is given.
pub fn build_workflow(graph_file: Option<&Path>, collaborators: Collaborators) -> Result<GraphExecutor> {
    let registry = StageRegistry::from_collaborators(collaborators);

    let graph = match graph_file {
        Some(path) => {
            let dto: WorkflowGraphDto = parse_json_file(path)?;
            log::info!("Graph configuration '{}' parsed successfully.", path.display());
            WorkflowGraph::from_dto(dto, &registry)?
        }
        None => WorkflowGraph::standard(&registry)?,
    };
    log::info!("Workflow graph with {} nodes constructed successfully.", graph.len());

    Ok(GraphExecutor::new(graph))
}
