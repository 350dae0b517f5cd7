use serde::{Deserialize, Serialize};

use crate::domain::model::allocation::TaskAllocation;
use crate::domain::model::disaster::Disaster;
use crate::domain::model::request::Request;
use crate::domain::model::task::Task;
use crate::domain::workflow::action::Action;

/// The record threaded through every stage of one workflow run.
///
/// Owned by the executor while the run lasts. Stages take it by value and hand
/// back the updated state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowState {
    pub previous_action: Option<Action>,
    pub next_action: Option<Action>,
    pub request: Option<Request>,
    pub disaster: Option<Disaster>,
    pub tasks: Option<Vec<Task>>,
    pub task_allocations: Option<Vec<TaskAllocation>>,
}

impl WorkflowState {
    /// A fresh state for a newly submitted request, starting at intake.
    pub fn for_request(request: Request) -> Self {
        Self { next_action: Some(Action::RequestExtraction), request: Some(request), ..Self::default() }
    }

    /// Records what the stage just did and what it wants next.
    pub fn advance(&mut self, done: Action, next: Option<Action>) {
        self.previous_action = Some(done);
        self.next_action = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let state: WorkflowState = serde_json::from_str(r#"{"next_action": "task_allocation"}"#).unwrap();

        assert_eq!(state.next_action, Some(Action::TaskAllocation));
        assert!(state.previous_action.is_none());
        assert!(state.tasks.is_none());
        assert!(state.task_allocations.is_none());
    }
}
