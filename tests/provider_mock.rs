#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use relief_workflow::domain::allocation::provider_trait::{AdminProvider, CandidateProviders, ResourceProvider, VolunteerProvider};
use relief_workflow::domain::model::coordinates::Coordinates;
use relief_workflow::domain::model::disaster::Disaster;
use relief_workflow::domain::model::resource::Resource;
use relief_workflow::domain::model::types::{DonorType, ResourceType, StatusType};
use relief_workflow::domain::model::volunteer::Volunteer;
use relief_workflow::domain::utils::id::{DisasterId, UserId};
use relief_workflow::error::{Error, Result};

pub const DISASTER_ID: &str = "flood-1";

/// Candidate lookups backed by plain vectors, counting every call.
#[derive(Debug, Default)]
pub struct MockProviders {
    pub resources: Vec<Resource>,
    pub volunteers: Vec<Volunteer>,
    pub volunteer_ids: Vec<UserId>,
    pub admin_ids: Vec<UserId>,
    pub fail_resources: bool,

    pub resource_calls: Mutex<Vec<(Vec<UserId>, ResourceType)>>,
    pub volunteer_calls: AtomicUsize,
    pub admin_calls: AtomicUsize,
}

impl MockProviders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource and makes its donor visible as a provider.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        let donor_ids = match resource.donor_type {
            DonorType::Volunteer => &mut self.volunteer_ids,
            DonorType::Admin => &mut self.admin_ids,
        };
        if !donor_ids.contains(&resource.donor_id) {
            donor_ids.push(resource.donor_id.clone());
        }
        self.resources.push(resource);
        self
    }

    /// Adds a volunteer registered for the disaster.
    pub fn with_volunteer(mut self, volunteer: Volunteer) -> Self {
        if !self.volunteer_ids.contains(&volunteer.id) {
            self.volunteer_ids.push(volunteer.id.clone());
        }
        self.volunteers.push(volunteer);
        self
    }

    /// Adds a volunteer record whose id is not in the disaster's volunteer id set.
    pub fn with_unregistered_volunteer(mut self, volunteer: Volunteer) -> Self {
        self.volunteers.push(volunteer);
        self
    }

    pub fn failing_resources(mut self) -> Self {
        self.fail_resources = true;
        self
    }

    pub fn resource_lookups(&self) -> Vec<(Vec<UserId>, ResourceType)> {
        self.resource_calls.lock().unwrap().clone()
    }

    pub fn into_providers(self) -> (Arc<MockProviders>, CandidateProviders) {
        let mock = Arc::new(self);
        let providers = CandidateProviders::from_single(mock.clone());
        (mock, providers)
    }
}

impl ResourceProvider for MockProviders {
    fn get_resources(&self, provider_ids: &[UserId], resource_type: ResourceType) -> Result<Vec<Resource>> {
        self.resource_calls.lock().unwrap().push((provider_ids.to_vec(), resource_type));
        if self.fail_resources {
            return Err(Error::collaborator("resource lookup", "backend unavailable"));
        }

        Ok(self
            .resources
            .iter()
            .filter(|resource| resource.resource_type == resource_type && provider_ids.contains(&resource.donor_id))
            .cloned()
            .collect())
    }
}

impl VolunteerProvider for MockProviders {
    fn get_volunteers(&self, _disaster_id: &DisasterId) -> Result<Vec<Volunteer>> {
        self.volunteer_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.volunteers.clone())
    }

    fn get_volunteer_ids(&self, _disaster_id: &DisasterId) -> Result<Vec<UserId>> {
        Ok(self.volunteer_ids.clone())
    }
}

impl AdminProvider for MockProviders {
    fn get_admin_ids(&self) -> Result<Vec<UserId>> {
        self.admin_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.admin_ids.clone())
    }
}

pub fn disaster_at(latitude: f64, longitude: f64) -> Disaster {
    Disaster {
        disaster_id: DisasterId::new(DISASTER_ID),
        disaster_type: "flood".to_string(),
        disaster_coordinates: Some(Coordinates::new(latitude, longitude)),
        disaster_location: None,
        disaster_summary: None,
    }
}

pub fn resource(donor: &str, resource_type: ResourceType, quantity: i64, latitude: f64, longitude: f64) -> Resource {
    Resource {
        donor_id: UserId::new(donor),
        donor_type: DonorType::Volunteer,
        resource_type,
        location: Coordinates::new(latitude, longitude),
        quantity,
        status: StatusType::Active,
    }
}

pub fn admin_resource(donor: &str, resource_type: ResourceType, quantity: i64, latitude: f64, longitude: f64) -> Resource {
    Resource { donor_type: DonorType::Admin, ..resource(donor, resource_type, quantity, latitude, longitude) }
}

pub fn volunteer(id: &str, latitude: f64, longitude: f64) -> Volunteer {
    Volunteer { id: UserId::new(id), location: Coordinates::new(latitude, longitude), status: StatusType::Active }
}

pub fn inactive_volunteer(id: &str, latitude: f64, longitude: f64) -> Volunteer {
    Volunteer { status: StatusType::Inactive, ..volunteer(id, latitude, longitude) }
}
