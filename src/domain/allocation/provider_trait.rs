use std::sync::Arc;

use crate::domain::model::resource::Resource;
use crate::domain::model::types::ResourceType;
use crate::domain::model::volunteer::Volunteer;
use crate::domain::utils::id::{DisasterId, UserId};
use crate::error::Result;

/// Lookup of donated resources.
pub trait ResourceProvider: Send + Sync {
    /// Returns the resources of `resource_type` donated by any of `provider_ids`.
    ///
    /// Implementations must not filter by status or quantity, the allocation engine does that.
    fn get_resources(&self, provider_ids: &[UserId], resource_type: ResourceType) -> Result<Vec<Resource>>;
}

/// Lookup of the volunteers registered for a disaster.
pub trait VolunteerProvider: Send + Sync {
    fn get_volunteers(&self, disaster_id: &DisasterId) -> Result<Vec<Volunteer>>;

    fn get_volunteer_ids(&self, disaster_id: &DisasterId) -> Result<Vec<UserId>>;
}

/// Lookup of administrator ids. Administrators are global, not scoped to a disaster.
pub trait AdminProvider: Send + Sync {
    fn get_admin_ids(&self) -> Result<Vec<UserId>>;
}

/// The three candidate lookups the allocation engine depends on.
#[derive(Clone)]
pub struct CandidateProviders {
    pub resources: Arc<dyn ResourceProvider>,
    pub volunteers: Arc<dyn VolunteerProvider>,
    pub admins: Arc<dyn AdminProvider>,
}

impl CandidateProviders {
    pub fn new(resources: Arc<dyn ResourceProvider>, volunteers: Arc<dyn VolunteerProvider>, admins: Arc<dyn AdminProvider>) -> Self {
        Self { resources, volunteers, admins }
    }

    /// Uses one object for all three lookups.
    pub fn from_single<P>(provider: Arc<P>) -> Self
    where
        P: ResourceProvider + VolunteerProvider + AdminProvider + 'static,
    {
        Self { resources: provider.clone(), volunteers: provider.clone(), admins: provider }
    }
}

impl std::fmt::Debug for CandidateProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateProviders").finish_non_exhaustive()
    }
}
