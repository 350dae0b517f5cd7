use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::model::types::{ResourceType, UrgencyLevel};
use crate::error::ConversionError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRequirement {
    /// Category name as delivered by the task planner. Parsed into a
    /// [`ResourceType`] when the task is allocated, unknown names are skipped there.
    pub resource_type: String,
    pub quantity: i64,
}

impl ResourceRequirement {
    pub fn new(resource_type: impl Into<String>, quantity: i64) -> Self {
        Self { resource_type: resource_type.into(), quantity }
    }

    pub fn parsed_type(&self) -> Result<ResourceType, ConversionError> {
        self.resource_type.parse()
    }
}

/// A requirement with a recognised category and a positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRequirement {
    pub resource_type: ResourceType,
    pub quantity: i64,
}

/// Why a declared requirement takes no part in allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedRequirement {
    UnknownType(ConversionError),
    NonPositiveQuantity { resource_type: ResourceType, quantity: i64 },
}

impl fmt::Display for SkippedRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkippedRequirement::UnknownType(err) => write!(f, "{}", err),
            SkippedRequirement::NonPositiveQuantity { resource_type, quantity } => {
                write!(f, "requirement for '{}' has non-positive quantity {}", resource_type, quantity)
            }
        }
    }
}

/// An actionable unit of work derived from a request. Read-only to the allocation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub urgency: Option<UrgencyLevel>,
    pub resource_requirements: Vec<ResourceRequirement>,
    pub manpower_requirement: usize,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Task::default() }
    }

    pub fn with_requirement(mut self, resource_type: impl Into<String>, quantity: i64) -> Self {
        self.resource_requirements.push(ResourceRequirement::new(resource_type, quantity));
        self
    }

    /// Resolves the declared requirements in declaration order.
    ///
    /// A category declared more than once keeps its first position and its last
    /// quantity. Unknown categories and non-positive quantities are returned as skipped.
    pub fn resolve_requirements(&self) -> (Vec<ResolvedRequirement>, Vec<SkippedRequirement>) {
        let mut merged: Vec<(ResourceType, i64)> = Vec::new();
        let mut skipped = Vec::new();

        for requirement in &self.resource_requirements {
            match requirement.parsed_type() {
                Ok(resource_type) => match merged.iter_mut().find(|(known, _)| *known == resource_type) {
                    Some(entry) => entry.1 = requirement.quantity,
                    None => merged.push((resource_type, requirement.quantity)),
                },
                Err(err) => skipped.push(SkippedRequirement::UnknownType(err)),
            }
        }

        let mut resolved = Vec::with_capacity(merged.len());
        for (resource_type, quantity) in merged {
            if quantity > 0 {
                resolved.push(ResolvedRequirement { resource_type, quantity });
            } else {
                skipped.push(SkippedRequirement::NonPositiveQuantity { resource_type, quantity });
            }
        }

        (resolved, skipped)
    }

    pub fn with_manpower(mut self, manpower_requirement: usize) -> Self {
        self.manpower_requirement = manpower_requirement;
        self
    }
}
