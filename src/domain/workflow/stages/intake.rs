use std::fmt;
use std::sync::Arc;

use crate::domain::workflow::action::Action;
use crate::domain::workflow::stage_trait::Stage;
use crate::domain::workflow::stages::collaborator_trait::{DisasterDirectory, RequestExtractor};
use crate::domain::workflow::workflow_state::WorkflowState;
use crate::error::{Error, MissingInput, Result};

/// Enriches the incoming request and decides whether it still needs a disaster.
pub struct IntakeStage {
    extractor: Arc<dyn RequestExtractor>,
    directory: Arc<dyn DisasterDirectory>,
}

impl IntakeStage {
    pub fn new(extractor: Arc<dyn RequestExtractor>, directory: Arc<dyn DisasterDirectory>) -> Self {
        Self { extractor, directory }
    }
}

impl fmt::Debug for IntakeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IntakeStage")
    }
}

impl Stage for IntakeStage {
    fn handle(&self, mut state: WorkflowState) -> Result<WorkflowState> {
        let request = state.request.as_mut().ok_or(Error::MissingInput(MissingInput::Request))?;

        if let Some(coordinates) = request.coordinates {
            request.location_from_coordinates = self.extractor.locate(&coordinates)?;
            log::debug!("Request located at {:?}.", request.location_from_coordinates);
        }

        let details = self.extractor.extract(request)?;
        request.merge_details(details);

        match request.disaster_id.clone() {
            None => {
                log::info!("Request has no disaster yet, sending it to disaster assignment.");
                state.advance(Action::RequestExtraction, Some(Action::DisasterAssignment));
            }
            Some(disaster_id) => {
                let disaster = self
                    .directory
                    .get_disaster(&disaster_id)?
                    .ok_or_else(|| Error::collaborator("disaster directory", format!("no disaster with id {}", disaster_id)))?;

                log::info!("Request belongs to disaster {}.", disaster_id);
                state.disaster = Some(disaster);
                state.advance(Action::RequestExtraction, Some(Action::TaskCreation));
            }
        }

        Ok(state)
    }
}
