use serde::{Deserialize, Serialize};

use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::types::StatusType;
use crate::domain::utils::id::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: UserId,
    pub location: Coordinates,
    pub status: StatusType,
}

impl Volunteer {
    pub fn is_active(&self) -> bool {
        self.status == StatusType::Active
    }
}
