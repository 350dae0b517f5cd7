use std::collections::{HashMap, HashSet};

use crate::domain::allocation::provider_trait::{CandidateProviders, ResourceProvider};
use crate::domain::model::resource::Resource;
use crate::domain::model::types::ResourceType;
use crate::domain::model::volunteer::Volunteer;
use crate::domain::utils::id::{DisasterId, UserId};
use crate::error::Result;

/// Read-only view of the candidate pools for one allocation run.
///
/// Volunteers and ids are fetched when the snapshot is captured. Resources are
/// fetched the first time a type is asked for and then reused, so every task in
/// the run ranks against the same data.
pub struct CandidateSnapshot<'a> {
    resource_provider: &'a dyn ResourceProvider,

    /// Volunteer ids of the disaster followed by administrator ids, without duplicates.
    provider_ids: Vec<UserId>,

    volunteer_ids: HashSet<UserId>,
    volunteers: Vec<Volunteer>,
    resources: HashMap<ResourceType, Vec<Resource>>,
}

impl<'a> CandidateSnapshot<'a> {
    pub fn capture(providers: &'a CandidateProviders, disaster_id: &DisasterId) -> Result<Self> {
        let volunteer_ids = providers.volunteers.get_volunteer_ids(disaster_id)?;
        let admin_ids = providers.admins.get_admin_ids()?;
        let volunteers = providers.volunteers.get_volunteers(disaster_id)?;

        log::debug!(
            "Captured candidates for disaster {}: {} volunteer ids, {} admin ids, {} volunteers.",
            disaster_id,
            volunteer_ids.len(),
            admin_ids.len(),
            volunteers.len()
        );

        Ok(Self::from_parts(providers.resources.as_ref(), volunteer_ids, admin_ids, volunteers))
    }

    pub fn from_parts(
        resource_provider: &'a dyn ResourceProvider,
        volunteer_ids: Vec<UserId>,
        admin_ids: Vec<UserId>,
        volunteers: Vec<Volunteer>,
    ) -> Self {
        let mut seen = HashSet::new();
        let provider_ids: Vec<UserId> = volunteer_ids.iter().chain(admin_ids.iter()).filter(|id| seen.insert((*id).clone())).cloned().collect();

        Self { resource_provider, provider_ids, volunteer_ids: volunteer_ids.into_iter().collect(), volunteers, resources: HashMap::new() }
    }

    pub fn provider_ids(&self) -> &[UserId] {
        &self.provider_ids
    }

    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    pub fn is_registered_volunteer(&self, id: &UserId) -> bool {
        self.volunteer_ids.contains(id)
    }

    /// Candidate resources of one type, fetched at most once per snapshot.
    pub fn resources(&mut self, resource_type: ResourceType) -> Result<&[Resource]> {
        if !self.resources.contains_key(&resource_type) {
            let fetched = self.resource_provider.get_resources(&self.provider_ids, resource_type)?;
            log::debug!("Fetched {} '{}' candidates from {} providers.", fetched.len(), resource_type, self.provider_ids.len());
            self.resources.insert(resource_type, fetched);
        }

        Ok(self.resources.get(&resource_type).map(Vec::as_slice).unwrap_or(&[]))
    }
}
