use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeOfNeed {
    Medical,
    Food,
    Rescue,
    Shelter,
    Water,
    Evacuation,
    Other,
}

/// The fixed set of supply categories donors can offer and tasks can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Vehicle,
    Food,
    Medicine,
    Water,
    Clothing,
    Shelter,
    RescueEquipment,
    CommunicationDevice,
    PowerSupply,
    SanitationKit,
    Fuel,
    MedicalKit,
}

impl ResourceType {
    pub const ALL: [ResourceType; 12] = [
        ResourceType::Vehicle,
        ResourceType::Food,
        ResourceType::Medicine,
        ResourceType::Water,
        ResourceType::Clothing,
        ResourceType::Shelter,
        ResourceType::RescueEquipment,
        ResourceType::CommunicationDevice,
        ResourceType::PowerSupply,
        ResourceType::SanitationKit,
        ResourceType::Fuel,
        ResourceType::MedicalKit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Vehicle => "vehicle",
            ResourceType::Food => "food",
            ResourceType::Medicine => "medicine",
            ResourceType::Water => "water",
            ResourceType::Clothing => "clothing",
            ResourceType::Shelter => "shelter",
            ResourceType::RescueEquipment => "rescue_equipment",
            ResourceType::CommunicationDevice => "communication_device",
            ResourceType::PowerSupply => "power_supply",
            ResourceType::SanitationKit => "sanitation_kit",
            ResourceType::Fuel => "fuel",
            ResourceType::MedicalKit => "medical_kit",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ResourceType::ALL
            .into_iter()
            .find(|resource_type| resource_type.as_str() == normalized)
            .ok_or_else(|| ConversionError::UnknownResourceType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonorType {
    Volunteer,
    Admin,
}

/// Availability of a resource or volunteer. Only `Active` candidates are allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    Active,
    Inactive,
    InUse,
}

/// Confirmation state of an allocation. The engine only ever creates `Pending` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptedType {
    Yes,
    No,
    Pending,
}

impl fmt::Display for AcceptedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            AcceptedType::Yes => "yes",
            AcceptedType::No => "no",
            AcceptedType::Pending => "pending",
        };
        f.write_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_parses_every_category() {
        for resource_type in ResourceType::ALL {
            assert_eq!(resource_type.as_str().parse::<ResourceType>(), Ok(resource_type));
        }
        assert_eq!(" Medical_Kit ".parse::<ResourceType>(), Ok(ResourceType::MedicalKit));
    }

    #[test]
    fn unknown_resource_type_is_a_conversion_error() {
        assert_eq!("blankets".parse::<ResourceType>(), Err(ConversionError::UnknownResourceType("blankets".to_string())));
    }

    #[test]
    fn serde_names_match_display_names() {
        let json = serde_json::to_string(&ResourceType::CommunicationDevice).unwrap();
        assert_eq!(json, "\"communication_device\"");
        assert_eq!(serde_json::to_string(&StatusType::InUse).unwrap(), "\"in_use\"");
    }
}
