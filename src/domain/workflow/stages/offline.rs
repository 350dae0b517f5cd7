use uuid::Uuid;

use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::disaster::Disaster;
use crate::domain::model::request::{Request, RequestDetails};
use crate::domain::model::task::Task;
use crate::domain::utils::id::DisasterId;
use crate::domain::workflow::stages::collaborator_trait::{DisasterMatcher, RequestExtractor, TaskPlanner};
use crate::error::{Error, Result};

/// Extractor for runs without a language model: no reverse geocoding and no
/// extracted details, the request keeps what it already carries.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughExtractor;

impl RequestExtractor for PassthroughExtractor {
    fn locate(&self, _coordinates: &Coordinates) -> Result<Option<String>> {
        Ok(None)
    }

    fn extract(&self, _request: &Request) -> Result<RequestDetails> {
        Ok(RequestDetails::default())
    }
}

/// Matches a request to the nearest known disaster of the same type, or of any
/// type if the request does not say.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestDisasterMatcher;

impl DisasterMatcher for NearestDisasterMatcher {
    fn match_disaster(&self, request: &Request, nearest: &[Disaster]) -> Result<Option<DisasterId>> {
        let matched = nearest.iter().find(|disaster| match &request.disaster_type {
            Some(disaster_type) => disaster.disaster_type.eq_ignore_ascii_case(disaster_type),
            None => true,
        });

        Ok(matched.map(|disaster| disaster.disaster_id.clone()))
    }

    fn create_disaster(&self, request: &Request) -> Result<Disaster> {
        Ok(Disaster {
            disaster_id: DisasterId::new(Uuid::new_v4().to_string()),
            disaster_type: request.disaster_type.clone().unwrap_or_else(|| "unknown".to_string()),
            disaster_coordinates: request.coordinates,
            disaster_location: request.location_from_input.clone().or_else(|| request.location_from_coordinates.clone()),
            disaster_summary: None,
        })
    }
}

/// Planner used when no task planner is configured. Every call fails, so the run
/// ends after task creation with no tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailablePlanner;

impl TaskPlanner for UnavailablePlanner {
    fn create_tasks(&self, _request: &Request, _disaster: &Disaster) -> Result<Vec<Task>> {
        Err(Error::collaborator("task planner", "no task planner configured"))
    }
}
