use std::fmt;
use std::sync::Arc;

use crate::domain::workflow::action::Action;
use crate::domain::workflow::stage_trait::Stage;
use crate::domain::workflow::stages::collaborator_trait::TaskPlanner;
use crate::domain::workflow::workflow_state::WorkflowState;
use crate::error::{Error, MissingInput, Result};

/// Breaks the request down into tasks for volunteers.
///
/// A planner failure does not abort the run. It leaves an empty task list and
/// ends the run before allocation.
pub struct TaskCreationStage {
    planner: Arc<dyn TaskPlanner>,
}

impl TaskCreationStage {
    pub fn new(planner: Arc<dyn TaskPlanner>) -> Self {
        Self { planner }
    }
}

impl fmt::Debug for TaskCreationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TaskCreationStage")
    }
}

impl Stage for TaskCreationStage {
    fn handle(&self, mut state: WorkflowState) -> Result<WorkflowState> {
        let request = state.request.as_ref().ok_or(Error::MissingInput(MissingInput::Request))?;
        let disaster = state.disaster.as_ref().ok_or(Error::MissingInput(MissingInput::Disaster))?;

        match self.planner.create_tasks(request, disaster) {
            Ok(tasks) => {
                log::info!("Created {} tasks for disaster {}.", tasks.len(), disaster.disaster_id);
                state.tasks = Some(tasks);
                state.advance(Action::TaskCreation, Some(Action::TaskAllocation));
            }
            Err(e) => {
                log::error!("Task creation failed: {}", e);
                state.tasks = Some(Vec::new());
                state.advance(Action::TaskCreation, None);
            }
        }

        Ok(state)
    }
}
