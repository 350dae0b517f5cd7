use crate::domain::allocation::engine::AllocationEngine;
use crate::domain::workflow::action::Action;
use crate::domain::workflow::stage_trait::Stage;
use crate::domain::workflow::workflow_state::WorkflowState;
use crate::error::Result;

/// Runs the allocation engine over the state's tasks. Always the last stage of a run.
#[derive(Debug)]
pub struct AllocationStage {
    engine: AllocationEngine,
}

impl AllocationStage {
    pub fn new(engine: AllocationEngine) -> Self {
        Self { engine }
    }
}

impl Stage for AllocationStage {
    fn handle(&self, mut state: WorkflowState) -> Result<WorkflowState> {
        let task_allocations = self.engine.allocate(state.disaster.as_ref(), state.tasks.as_deref())?;

        state.task_allocations = Some(task_allocations);
        state.advance(Action::TaskAllocation, None);

        Ok(state)
    }
}
