use std::fmt::Debug;

use crate::domain::workflow::workflow_state::WorkflowState;
use crate::error::Result;

/// One node of the workflow graph.
///
/// A stage reads and updates the state, then sets `previous_action` to what it
/// did and `next_action` to what should run next. An `Err` aborts the run.
pub trait Stage: Send + Sync + Debug {
    fn handle(&self, state: WorkflowState) -> Result<WorkflowState>;
}
