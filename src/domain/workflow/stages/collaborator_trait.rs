use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::disaster::Disaster;
use crate::domain::model::request::{Request, RequestDetails};
use crate::domain::model::task::Task;
use crate::domain::utils::id::DisasterId;
use crate::error::Result;

/// Turns raw request input into structured details.
pub trait RequestExtractor: Send + Sync {
    /// Human readable place name for a point (reverse geocoding).
    fn locate(&self, coordinates: &Coordinates) -> Result<Option<String>>;

    /// Reads the text, voice and image input of a request.
    fn extract(&self, request: &Request) -> Result<RequestDetails>;
}

/// Known disasters. `add_disaster` takes `&self`, implementations synchronise internally.
pub trait DisasterDirectory: Send + Sync {
    fn list_disasters(&self) -> Result<Vec<Disaster>>;

    fn get_disaster(&self, disaster_id: &DisasterId) -> Result<Option<Disaster>>;

    fn add_disaster(&self, disaster: Disaster) -> Result<()>;
}

/// Decides which disaster a request belongs to.
pub trait DisasterMatcher: Send + Sync {
    /// Picks one of `nearest` for the request, or `None` if none of them fits.
    fn match_disaster(&self, request: &Request, nearest: &[Disaster]) -> Result<Option<DisasterId>>;

    /// Describes a new disaster for a request that matched no known one.
    fn create_disaster(&self, request: &Request) -> Result<Disaster>;
}

pub trait TaskPlanner: Send + Sync {
    fn create_tasks(&self, request: &Request, disaster: &Disaster) -> Result<Vec<Task>>;
}
