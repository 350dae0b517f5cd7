use std::collections::HashSet;

use crate::domain::allocation::candidate_snapshot::CandidateSnapshot;
use crate::domain::allocation::distance_ranking::DistanceRanking;
use crate::domain::allocation::provider_trait::CandidateProviders;
use crate::domain::model::allocation::{ResourceAllocation, TaskAllocation, VolunteerAllocation};
use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::disaster::Disaster;
use crate::domain::model::task::Task;
use crate::domain::utils::id::UserId;
use crate::error::{Error, MissingInput, Result};

/// Volunteer ids already handed to a task during the current run.
///
/// Owned by a single run; a volunteer that lands in here cannot be given to a later task.
#[derive(Debug, Default)]
pub struct AssignedVolunteers {
    ids: HashSet<UserId>,
}

impl AssignedVolunteers {
    pub fn contains(&self, id: &UserId) -> bool {
        self.ids.contains(id)
    }

    /// Returns false if the volunteer was already assigned.
    pub fn assign(&mut self, id: &UserId) -> bool {
        self.ids.insert(id.clone())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Assigns resources and volunteers to tasks, nearest candidates first.
///
/// Tasks are processed in list order. Within a task the resource requirements are
/// processed in declaration order and each one greedily consumes the nearest active
/// candidates until it is met or the candidates run out. Volunteers are taken
/// nearest first and never given to more than one task of the same run.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    providers: CandidateProviders,
}

impl AllocationEngine {
    pub fn new(providers: CandidateProviders) -> Self {
        Self { providers }
    }

    /// Produces one `TaskAllocation` per task, in task order.
    ///
    /// Fails if the disaster, its coordinates or the task list are missing, if the
    /// coordinates are out of range, or if a candidate lookup fails. Unmet requirements
    /// are not an error.
    pub fn allocate(&self, disaster: Option<&Disaster>, tasks: Option<&[Task]>) -> Result<Vec<TaskAllocation>> {
        let disaster = disaster.ok_or(Error::MissingInput(MissingInput::Disaster))?;
        let origin = disaster.disaster_coordinates.ok_or_else(|| Error::MissingCoordinatesError(disaster.disaster_id.clone()))?;
        if !origin.is_valid() {
            return Err(Error::InvalidCoordinatesError(disaster.disaster_id.clone()));
        }
        let tasks = tasks.ok_or(Error::MissingInput(MissingInput::Tasks))?;

        log::info!("Allocating {} tasks for disaster {}.", tasks.len(), disaster.disaster_id);

        let mut snapshot = CandidateSnapshot::capture(&self.providers, &disaster.disaster_id)?;
        allocate_tasks(origin, tasks, &mut snapshot)
    }
}

/// Runs the allocation for all tasks against one candidate snapshot.
///
/// Given the same origin, tasks and snapshot contents, the output is identical.
pub fn allocate_tasks(origin: Coordinates, tasks: &[Task], snapshot: &mut CandidateSnapshot<'_>) -> Result<Vec<TaskAllocation>> {
    let ranking = DistanceRanking::new(origin);
    let mut assigned = AssignedVolunteers::default();
    let mut task_allocations = Vec::with_capacity(tasks.len());

    for task in tasks {
        let resource_allocations = allocate_resources(&ranking, task, snapshot)?;
        let volunteer_allocations = allocate_volunteers(&ranking, task, snapshot, &mut assigned);

        let task_allocation = TaskAllocation { task: task.clone(), resource_allocations, volunteer_allocations };

        for shortfall in task_allocation.shortfalls() {
            tracing::warn!(task = %task.name, "Under-allocated {}.", shortfall);
        }
        log::info!(
            "Task '{}': {} resource allocations, {} volunteers.",
            task.name,
            task_allocation.resource_allocations.len(),
            task_allocation.volunteer_allocations.len()
        );

        task_allocations.push(task_allocation);
    }

    Ok(task_allocations)
}

fn allocate_resources(ranking: &DistanceRanking, task: &Task, snapshot: &mut CandidateSnapshot<'_>) -> Result<Vec<ResourceAllocation>> {
    let (requirements, skipped) = task.resolve_requirements();
    for skip in skipped {
        tracing::warn!(task = %task.name, "Skipping resource requirement: {}.", skip);
    }

    let mut allocations = Vec::new();

    for requirement in requirements {
        let candidates = snapshot.resources(requirement.resource_type)?;
        let available = candidates.iter().filter(|resource| resource.resource_type == requirement.resource_type && resource.is_available());

        let mut remaining = requirement.quantity;
        for ranked in ranking.rank(available) {
            if remaining == 0 {
                break;
            }

            let take = ranked.candidate.quantity.min(remaining);
            if take > 0 {
                allocations.push(ResourceAllocation::pending(ranked.candidate.carve(take)));
                remaining -= take;
            }
        }

        log::debug!(
            "Task '{}': allocated {} of {} units of '{}'.",
            task.name,
            requirement.quantity - remaining,
            requirement.quantity,
            requirement.resource_type
        );
    }

    Ok(allocations)
}

fn allocate_volunteers(
    ranking: &DistanceRanking,
    task: &Task,
    snapshot: &CandidateSnapshot<'_>,
    assigned: &mut AssignedVolunteers,
) -> Vec<VolunteerAllocation> {
    let required = task.manpower_requirement;
    if required == 0 {
        return Vec::new();
    }

    let eligible = snapshot
        .volunteers()
        .iter()
        .filter(|volunteer| volunteer.is_active() && snapshot.is_registered_volunteer(&volunteer.id) && !assigned.contains(&volunteer.id));

    let mut allocations = Vec::new();
    for ranked in ranking.rank(eligible) {
        if allocations.len() == required {
            break;
        }
        // The pool may list a volunteer twice.
        if assigned.assign(&ranked.candidate.id) {
            allocations.push(VolunteerAllocation::pending(ranked.candidate.clone()));
        }
    }

    allocations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allocation::provider_trait::ResourceProvider;
    use crate::domain::model::resource::Resource;
    use crate::domain::model::types::{ResourceType, StatusType};
    use crate::domain::model::volunteer::Volunteer;

    struct NoResources;

    impl ResourceProvider for NoResources {
        fn get_resources(&self, _provider_ids: &[UserId], _resource_type: ResourceType) -> Result<Vec<Resource>> {
            Ok(Vec::new())
        }
    }

    fn volunteer(id: &str, longitude: f64) -> Volunteer {
        Volunteer { id: UserId::new(id), location: Coordinates::new(0.0, longitude), status: StatusType::Active }
    }

    #[test]
    fn assigned_volunteers_accepts_each_id_once() {
        let mut assigned = AssignedVolunteers::default();
        let id = UserId::new("v1");

        assert!(assigned.assign(&id));
        assert!(!assigned.assign(&id));
        assert!(assigned.contains(&id));
        assert_eq!(assigned.len(), 1);
    }

    #[test]
    fn volunteer_listed_twice_is_allocated_once() {
        let provider = NoResources;
        let volunteers = vec![volunteer("v1", 0.01), volunteer("v1", 0.01), volunteer("v2", 0.02)];
        let mut snapshot = CandidateSnapshot::from_parts(&provider, vec![UserId::new("v1"), UserId::new("v2")], Vec::new(), volunteers);
        let tasks = vec![Task::new("carry").with_manpower(2)];

        let allocations = allocate_tasks(Coordinates::new(0.0, 0.0), &tasks, &mut snapshot).unwrap();

        let ids: Vec<&str> = allocations[0].volunteer_allocations.iter().map(|a| a.volunteer.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2"]);
    }

    #[test]
    fn huge_manpower_requirement_takes_what_is_there() {
        let provider = NoResources;
        let mut snapshot = CandidateSnapshot::from_parts(&provider, vec![UserId::new("v1")], Vec::new(), vec![volunteer("v1", 0.01)]);
        let tasks = vec![Task::new("mass evacuation").with_manpower(usize::MAX / 2)];

        let allocations = allocate_tasks(Coordinates::new(0.0, 0.0), &tasks, &mut snapshot).unwrap();

        assert_eq!(allocations[0].volunteer_allocations.len(), 1);
        assert_eq!(allocations[0].shortfalls().len(), 1);
    }

    #[test]
    fn unmet_requirement_still_yields_an_allocation_per_task() {
        let provider = NoResources;
        let mut snapshot = CandidateSnapshot::from_parts(&provider, Vec::new(), Vec::new(), Vec::new());
        let tasks = vec![Task::new("a").with_requirement("food", 3), Task::new("b").with_manpower(1)];

        let allocations = allocate_tasks(Coordinates::new(0.0, 0.0), &tasks, &mut snapshot).unwrap();

        assert_eq!(allocations.len(), 2);
        assert!(allocations.iter().all(|a| a.resource_allocations.is_empty() && a.volunteer_allocations.is_empty()));
    }
}
