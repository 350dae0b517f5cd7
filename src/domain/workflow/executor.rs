use uuid::Uuid;

use crate::domain::utils::id::NodeName;
use crate::domain::workflow::graph::WorkflowGraph;
use crate::domain::workflow::router::Target;
use crate::domain::workflow::workflow_state::WorkflowState;
use crate::error::{ConversionError, Error, Result};

/// Result of one completed run.
#[derive(Debug, Clone)]
pub struct WorkflowRun {
    pub run_id: Uuid,
    pub state: WorkflowState,

    /// Nodes in the order they were invoked.
    pub visited: Vec<NodeName>,
}

/// Drives a state through a [`WorkflowGraph`] until it is routed to the end.
///
/// Runs are sequential and share nothing, so one executor can serve many runs.
#[derive(Debug, Clone)]
pub struct GraphExecutor {
    graph: WorkflowGraph,
}

impl GraphExecutor {
    pub fn new(graph: WorkflowGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    pub fn run(&self, initial_state: WorkflowState) -> Result<WorkflowState> {
        self.run_traced(initial_state).map(|run| run.state)
    }

    /// Runs the workflow and also returns the run id and the visited nodes.
    ///
    /// A stage error aborts the run and comes back as `Error::StageFailed` naming the node.
    pub fn run_traced(&self, initial_state: WorkflowState) -> Result<WorkflowRun> {
        let run_id = Uuid::new_v4();
        let max_steps = self.graph.max_steps();

        tracing::info!("[{}] Workflow run started with next action {:?}.", run_id, initial_state.next_action);

        let mut state = initial_state;
        let mut visited: Vec<NodeName> = Vec::new();
        let mut target = self.graph.route_from_start(&state);

        while let Target::Node(key) = target {
            if visited.len() == max_steps {
                tracing::error!("[{}] Step limit of {} reached, aborting.", run_id, max_steps);
                return Err(Error::StepLimitExceeded(max_steps));
            }

            let node = self.graph.node(key).ok_or_else(|| ConversionError::UnknownNode(format!("{:?}", key)))?;
            tracing::info!("[{}] Step {}: node '{}'.", run_id, visited.len() + 1, node.name);

            state = node.stage.handle(state).map_err(|e| {
                tracing::error!("[{}] Node '{}' failed: {}", run_id, node.name, e);
                Error::StageFailed { node: node.name.clone(), source: Box::new(e) }
            })?;
            visited.push(node.name.clone());

            target = self.graph.route(key, &state);
            tracing::debug!("[{}] Node '{}' set next action {:?}.", run_id, node.name, state.next_action);
        }

        tracing::info!("[{}] Workflow run finished after {} steps.", run_id, visited.len());

        Ok(WorkflowRun { run_id, state, visited })
    }
}
