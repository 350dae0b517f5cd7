use serde::{Deserialize, Serialize};

use crate::domain::model::coordinates::Coordinates;
use crate::domain::utils::id::DisasterId;

/// The incident context that requests, tasks and allocations are scoped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disaster {
    pub disaster_id: DisasterId,
    pub disaster_type: String,
    #[serde(default)]
    pub disaster_coordinates: Option<Coordinates>,
    #[serde(default)]
    pub disaster_location: Option<String>,
    #[serde(default)]
    pub disaster_summary: Option<String>,
}
