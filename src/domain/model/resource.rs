use serde::{Deserialize, Serialize};

use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::types::{DonorType, ResourceType, StatusType};
use crate::domain::utils::id::UserId;

/// A supply offered by a donor, as returned by the resource lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub donor_id: UserId,
    pub donor_type: DonorType,
    pub resource_type: ResourceType,
    pub location: Coordinates,
    pub quantity: i64,
    pub status: StatusType,
}

impl Resource {
    pub fn is_available(&self) -> bool {
        self.status == StatusType::Active && self.quantity > 0
    }

    /// Returns a copy of this resource carrying only `quantity` units.
    pub fn carve(&self, quantity: i64) -> Resource {
        Resource { quantity, ..self.clone() }
    }
}
