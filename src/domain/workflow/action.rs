use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::workflow::stage_kind::StageKind;
use crate::error::ConversionError;

/// The next workflow stage a node asks for. The router dispatches on nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    RequestExtraction,
    DisasterAssignment,
    IncidentAssignment,
    TaskCreation,
    TaskAllocation,
}

impl Action {
    pub const ALL: [Action; 5] =
        [Action::RequestExtraction, Action::DisasterAssignment, Action::IncidentAssignment, Action::TaskCreation, Action::TaskAllocation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::RequestExtraction => "request_extraction",
            Action::DisasterAssignment => "disaster_assignment",
            Action::IncidentAssignment => "incident_assignment",
            Action::TaskCreation => "task_creation",
            Action::TaskAllocation => "task_allocation",
        }
    }

    /// The stage that handles this action in the standard graph.
    pub fn default_stage(&self) -> StageKind {
        match self {
            Action::RequestExtraction => StageKind::Intake,
            Action::DisasterAssignment | Action::IncidentAssignment => StageKind::DisasterMatching,
            Action::TaskCreation => StageKind::TaskCreation,
            Action::TaskAllocation => StageKind::Allocation,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL.into_iter().find(|action| action.as_str() == s).ok_or_else(|| ConversionError::UnknownAction(s.to_string()))
    }
}
