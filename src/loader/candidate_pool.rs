use std::collections::HashSet;
use std::path::Path;
use std::sync::RwLock;

use crate::api::candidate_dto::{CandidatePoolDto, DisasterDto, ResourceDto, VolunteerDto};
use crate::domain::allocation::provider_trait::{AdminProvider, ResourceProvider, VolunteerProvider};
use crate::domain::model::disaster::Disaster;
use crate::domain::model::resource::Resource;
use crate::domain::model::types::ResourceType;
use crate::domain::model::volunteer::Volunteer;
use crate::domain::utils::id::{DisasterId, UserId};
use crate::domain::workflow::stages::collaborator_trait::DisasterDirectory;
use crate::error::{Error, Result};
use crate::loader::parser::parse_json_file;

#[derive(Debug, Clone)]
struct RegisteredVolunteer {
    volunteer: Volunteer,
    disaster_ids: HashSet<DisasterId>,
}

/// Disasters, volunteers, administrators and resources held in memory.
///
/// Serves every lookup the allocation engine and the disaster stages need. Only
/// the disaster list can change after loading.
#[derive(Debug, Default)]
pub struct CandidatePool {
    disasters: RwLock<Vec<Disaster>>,
    volunteers: Vec<RegisteredVolunteer>,
    admin_ids: Vec<UserId>,
    resources: Vec<Resource>,
}

impl CandidatePool {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let dto: CandidatePoolDto = parse_json_file(file_path)?;
        Self::from_dto(dto)
    }

    pub fn from_dto(dto: CandidatePoolDto) -> Result<Self> {
        let disasters = dto.disasters.into_iter().map(Disaster::from).collect();
        let volunteers = dto.volunteers.into_iter().map(RegisteredVolunteer::from).collect();
        let admin_ids = dto.admin_ids.into_iter().map(UserId::new).collect();
        let resources = dto.resources.into_iter().map(Resource::try_from).collect::<Result<Vec<_>>>()?;

        let pool = Self { disasters: RwLock::new(disasters), volunteers, admin_ids, resources };
        log::info!(
            "Candidate pool loaded: {} volunteers, {} admins, {} resources.",
            pool.volunteers.len(),
            pool.admin_ids.len(),
            pool.resources.len()
        );

        Ok(pool)
    }

    fn registered_for<'a>(&'a self, disaster_id: &'a DisasterId) -> impl Iterator<Item = &'a Volunteer> + 'a {
        self.volunteers.iter().filter(move |entry| entry.disaster_ids.contains(disaster_id)).map(|entry| &entry.volunteer)
    }
}

fn poisoned() -> Error {
    Error::collaborator("candidate pool", "disaster list lock poisoned")
}

impl From<DisasterDto> for Disaster {
    fn from(dto: DisasterDto) -> Self {
        Disaster {
            disaster_id: DisasterId::new(dto.disaster_id),
            disaster_type: dto.disaster_type,
            disaster_coordinates: dto.coordinates,
            disaster_location: dto.location,
            disaster_summary: dto.summary,
        }
    }
}

impl From<VolunteerDto> for RegisteredVolunteer {
    fn from(dto: VolunteerDto) -> Self {
        RegisteredVolunteer {
            volunteer: Volunteer { id: UserId::new(dto.id), location: dto.location, status: dto.status },
            disaster_ids: dto.disaster_ids.into_iter().map(DisasterId::new).collect(),
        }
    }
}

impl TryFrom<ResourceDto> for Resource {
    type Error = Error;

    fn try_from(dto: ResourceDto) -> Result<Self> {
        Ok(Resource {
            donor_id: UserId::new(dto.donor_id),
            donor_type: dto.donor_type,
            resource_type: dto.resource_type.parse::<ResourceType>()?,
            location: dto.location,
            quantity: dto.quantity,
            status: dto.status,
        })
    }
}

impl ResourceProvider for CandidatePool {
    fn get_resources(&self, provider_ids: &[UserId], resource_type: ResourceType) -> Result<Vec<Resource>> {
        let providers: HashSet<&UserId> = provider_ids.iter().collect();

        Ok(self
            .resources
            .iter()
            .filter(|resource| resource.resource_type == resource_type && providers.contains(&resource.donor_id))
            .cloned()
            .collect())
    }
}

impl VolunteerProvider for CandidatePool {
    fn get_volunteers(&self, disaster_id: &DisasterId) -> Result<Vec<Volunteer>> {
        Ok(self.registered_for(disaster_id).cloned().collect())
    }

    fn get_volunteer_ids(&self, disaster_id: &DisasterId) -> Result<Vec<UserId>> {
        Ok(self.registered_for(disaster_id).map(|volunteer| volunteer.id.clone()).collect())
    }
}

impl AdminProvider for CandidatePool {
    fn get_admin_ids(&self) -> Result<Vec<UserId>> {
        Ok(self.admin_ids.clone())
    }
}

impl DisasterDirectory for CandidatePool {
    fn list_disasters(&self) -> Result<Vec<Disaster>> {
        Ok(self.disasters.read().map_err(|_| poisoned())?.clone())
    }

    fn get_disaster(&self, disaster_id: &DisasterId) -> Result<Option<Disaster>> {
        let disasters = self.disasters.read().map_err(|_| poisoned())?;
        Ok(disasters.iter().find(|disaster| &disaster.disaster_id == disaster_id).cloned())
    }

    /// Replaces a disaster with the same id, otherwise appends.
    fn add_disaster(&self, disaster: Disaster) -> Result<()> {
        let mut disasters = self.disasters.write().map_err(|_| poisoned())?;
        match disasters.iter_mut().find(|known| known.disaster_id == disaster.disaster_id) {
            Some(known) => *known = disaster,
            None => disasters.push(disaster),
        }
        Ok(())
    }
}
