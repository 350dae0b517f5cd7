use serde::{Deserialize, Serialize};

use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::types::{TypeOfNeed, UrgencyLevel};
use crate::domain::utils::id::DisasterId;

/// A help request submitted by an affected individual.
///
/// The `original_*` fields are what the person sent; everything else is filled in
/// by the intake and disaster-matching stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    pub disaster_id: Option<DisasterId>,

    pub original_request_text_available: bool,
    pub original_request_text: String,
    pub original_request_voice_available: bool,
    pub original_request_voice: String,
    pub extracted_request_voice: Option<String>,
    pub original_request_image_available: bool,
    pub original_request_image: String,
    pub extracted_request_image: Option<String>,

    pub coordinates: Option<Coordinates>,
    pub location_from_coordinates: Option<String>,
    pub location_from_input: Option<String>,
    pub urgency: Option<UrgencyLevel>,
    pub type_of_need: Option<TypeOfNeed>,
    pub disaster_type: Option<String>,
    pub affected_people_count: Option<u32>,
}

/// Structured details the request extractor pulls out of text, voice and image input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDetails {
    pub extracted_request_voice: Option<String>,
    pub extracted_request_image: Option<String>,
    pub location_from_input: Option<String>,
    pub urgency: Option<UrgencyLevel>,
    pub type_of_need: Option<TypeOfNeed>,
    pub disaster_type: Option<String>,
    pub affected_people_count: Option<u32>,
}

impl Request {
    /// Copies extracted details onto the request. Fields the extractor left empty
    /// keep their current value.
    pub fn merge_details(&mut self, details: RequestDetails) {
        if details.extracted_request_voice.is_some() {
            self.extracted_request_voice = details.extracted_request_voice;
        }
        if details.extracted_request_image.is_some() {
            self.extracted_request_image = details.extracted_request_image;
        }
        if details.location_from_input.is_some() {
            self.location_from_input = details.location_from_input;
        }
        if details.urgency.is_some() {
            self.urgency = details.urgency;
        }
        if details.type_of_need.is_some() {
            self.type_of_need = details.type_of_need;
        }
        if details.disaster_type.is_some() {
            self.disaster_type = details.disaster_type;
        }
        if details.affected_people_count.is_some() {
            self.affected_people_count = details.affected_people_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_values_the_extractor_did_not_provide() {
        let mut request = Request {
            urgency: Some(UrgencyLevel::High),
            disaster_type: Some("flood".to_string()),
            ..Request::default()
        };

        request.merge_details(RequestDetails {
            type_of_need: Some(TypeOfNeed::Water),
            affected_people_count: Some(12),
            ..RequestDetails::default()
        });

        assert_eq!(request.urgency, Some(UrgencyLevel::High));
        assert_eq!(request.disaster_type.as_deref(), Some("flood"));
        assert_eq!(request.type_of_need, Some(TypeOfNeed::Water));
        assert_eq!(request.affected_people_count, Some(12));
    }
}
