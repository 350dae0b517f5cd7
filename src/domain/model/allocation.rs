use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::model::resource::Resource;
use crate::domain::model::task::Task;
use crate::domain::model::types::{AcceptedType, ResourceType};
use crate::domain::model::volunteer::Volunteer;

/// A portion of one candidate resource assigned to a task.
///
/// The embedded resource is an owned copy of the candidate with a reduced quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceAllocation {
    pub resource: Resource,
    pub accepted: AcceptedType,
}

impl ResourceAllocation {
    pub fn pending(resource: Resource) -> Self {
        Self { resource, accepted: AcceptedType::Pending }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerAllocation {
    pub volunteer: Volunteer,
    pub accepted: AcceptedType,
}

impl VolunteerAllocation {
    pub fn pending(volunteer: Volunteer) -> Self {
        Self { volunteer, accepted: AcceptedType::Pending }
    }
}

/// Everything allocated to one task in one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAllocation {
    pub task: Task,
    pub resource_allocations: Vec<ResourceAllocation>,
    pub volunteer_allocations: Vec<VolunteerAllocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortfallKind {
    Resource(ResourceType),
    Manpower,
}

/// A requirement the engine could only partially satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub kind: ShortfallKind,
    pub required: i64,
    pub allocated: i64,
}

impl Shortfall {
    pub fn missing(&self) -> i64 {
        self.required - self.allocated
    }
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ShortfallKind::Resource(resource_type) => resource_type.to_string(),
            ShortfallKind::Manpower => "volunteers".to_string(),
        };
        write!(f, "{}: {} of {} allocated", what, self.allocated, self.required)
    }
}

impl TaskAllocation {
    pub fn new(task: Task) -> Self {
        Self { task, resource_allocations: Vec::new(), volunteer_allocations: Vec::new() }
    }

    /// Sum of the quantities allocated for one resource type.
    pub fn allocated_quantity(&self, resource_type: ResourceType) -> i64 {
        self.resource_allocations
            .iter()
            .filter(|allocation| allocation.resource.resource_type == resource_type)
            .map(|allocation| allocation.resource.quantity)
            .sum()
    }

    /// Requirements of the task that are not fully covered, in declaration order,
    /// followed by the manpower shortfall if there is one.
    pub fn shortfalls(&self) -> Vec<Shortfall> {
        let (requirements, _) = self.task.resolve_requirements();

        let mut shortfalls: Vec<Shortfall> = requirements
            .into_iter()
            .map(|requirement| Shortfall {
                kind: ShortfallKind::Resource(requirement.resource_type),
                required: requirement.quantity,
                allocated: self.allocated_quantity(requirement.resource_type),
            })
            .filter(|shortfall| shortfall.missing() > 0)
            .collect();

        let required_manpower = i64::try_from(self.task.manpower_requirement).unwrap_or(i64::MAX);
        let allocated_manpower = i64::try_from(self.volunteer_allocations.len()).unwrap_or(i64::MAX);
        if allocated_manpower < required_manpower {
            shortfalls.push(Shortfall { kind: ShortfallKind::Manpower, required: required_manpower, allocated: allocated_manpower });
        }

        shortfalls
    }

    pub fn is_fully_allocated(&self) -> bool {
        self.shortfalls().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::coordinates::Coordinates;
    use crate::domain::model::types::{DonorType, StatusType};
    use crate::domain::utils::id::UserId;

    fn food(donor: &str, quantity: i64) -> Resource {
        Resource {
            donor_id: UserId::new(donor),
            donor_type: DonorType::Volunteer,
            resource_type: ResourceType::Food,
            location: Coordinates::new(0.0, 0.0),
            quantity,
            status: StatusType::Active,
        }
    }

    #[test]
    fn shortfalls_report_missing_units_and_people() {
        let task = Task::new("feed shelter").with_requirement("food", 5).with_requirement("water", 2).with_manpower(3);
        let mut allocation = TaskAllocation::new(task);
        allocation.resource_allocations.push(ResourceAllocation::pending(food("a", 3)));

        let shortfalls = allocation.shortfalls();

        assert_eq!(
            shortfalls,
            vec![
                Shortfall { kind: ShortfallKind::Resource(ResourceType::Food), required: 5, allocated: 3 },
                Shortfall { kind: ShortfallKind::Resource(ResourceType::Water), required: 2, allocated: 0 },
                Shortfall { kind: ShortfallKind::Manpower, required: 3, allocated: 0 },
            ]
        );
        assert_eq!(shortfalls[0].to_string(), "food: 3 of 5 allocated");
        assert!(!allocation.is_fully_allocated());
    }

    #[test]
    fn fully_covered_task_has_no_shortfall() {
        let task = Task::new("feed shelter").with_requirement("food", 5);
        let mut allocation = TaskAllocation::new(task);
        allocation.resource_allocations.push(ResourceAllocation::pending(food("a", 3)));
        allocation.resource_allocations.push(ResourceAllocation::pending(food("b", 2)));

        assert_eq!(allocation.allocated_quantity(ResourceType::Food), 5);
        assert!(allocation.is_fully_allocated());
    }

    #[test]
    fn manpower_beyond_i64_still_counts_as_a_shortfall() {
        let allocation = TaskAllocation::new(Task::new("mass evacuation").with_manpower(usize::MAX));

        assert_eq!(allocation.shortfalls(), vec![Shortfall { kind: ShortfallKind::Manpower, required: i64::MAX, allocated: 0 }]);
    }
}
