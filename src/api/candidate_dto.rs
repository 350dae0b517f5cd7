use serde::{Deserialize, Serialize};

use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::types::{DonorType, StatusType};

/// In-memory candidate pool file: known disasters plus everyone who can help.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePoolDto {
    #[serde(default)]
    pub disasters: Vec<DisasterDto>,
    #[serde(default)]
    pub volunteers: Vec<VolunteerDto>,
    #[serde(default)]
    pub admin_ids: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DisasterDto {
    pub disaster_id: String,
    pub disaster_type: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerDto {
    pub id: String,
    pub location: Coordinates,
    pub status: StatusType,

    /// Disasters the volunteer is registered for.
    #[serde(default)]
    pub disaster_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub donor_id: String,
    pub donor_type: DonorType,
    pub resource_type: String,
    pub location: Coordinates,
    pub quantity: i64,
    pub status: StatusType,
}
