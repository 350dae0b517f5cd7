use std::fmt;
use std::sync::Arc;

use crate::domain::utils::distance::nearest_disasters;
use crate::domain::workflow::action::Action;
use crate::domain::workflow::stage_trait::Stage;
use crate::domain::workflow::stages::collaborator_trait::{DisasterDirectory, DisasterMatcher};
use crate::domain::workflow::workflow_state::WorkflowState;
use crate::error::{Error, MissingInput, Result};

/// How many nearby disasters the matcher gets to choose from.
pub const NEAREST_DISASTERS: usize = 2;

/// Assigns the request to a nearby known disaster or registers a new one.
///
/// Serves both `disaster_assignment` and `incident_assignment`.
pub struct DisasterMatchingStage {
    directory: Arc<dyn DisasterDirectory>,
    matcher: Arc<dyn DisasterMatcher>,
}

impl DisasterMatchingStage {
    pub fn new(directory: Arc<dyn DisasterDirectory>, matcher: Arc<dyn DisasterMatcher>) -> Self {
        Self { directory, matcher }
    }
}

impl fmt::Debug for DisasterMatchingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisasterMatchingStage")
    }
}

impl Stage for DisasterMatchingStage {
    fn handle(&self, mut state: WorkflowState) -> Result<WorkflowState> {
        let dispatched_for = match state.next_action {
            Some(Action::IncidentAssignment) => Action::IncidentAssignment,
            _ => Action::DisasterAssignment,
        };

        let request = state.request.as_mut().ok_or(Error::MissingInput(MissingInput::Request))?;
        let origin = request.coordinates.ok_or(Error::MissingInput(MissingInput::RequestCoordinates))?;

        let known = self.directory.list_disasters()?;
        let nearest = nearest_disasters(&origin, &known, NEAREST_DISASTERS);
        log::debug!("{} known disasters, offering {} nearest to the matcher.", known.len(), nearest.len());

        let matched = match self.matcher.match_disaster(request, &nearest)? {
            Some(disaster_id) => self.directory.get_disaster(&disaster_id)?,
            None => None,
        };

        let disaster = match matched {
            Some(disaster) => {
                log::info!("Request matched existing disaster {}.", disaster.disaster_id);
                disaster
            }
            None => {
                let disaster = self.matcher.create_disaster(request)?;
                log::info!("No matching disaster, registered new disaster {}.", disaster.disaster_id);
                self.directory.add_disaster(disaster.clone())?;
                disaster
            }
        };

        request.disaster_id = Some(disaster.disaster_id.clone());
        state.disaster = Some(disaster);
        state.advance(dispatched_for, Some(Action::TaskCreation));

        Ok(state)
    }
}
