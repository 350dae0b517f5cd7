use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::allocation::engine::AllocationEngine;
use crate::domain::allocation::provider_trait::CandidateProviders;
use crate::domain::workflow::stage_kind::StageKind;
use crate::domain::workflow::stage_trait::Stage;
use crate::domain::workflow::stages::allocation::AllocationStage;
use crate::domain::workflow::stages::collaborator_trait::{DisasterDirectory, DisasterMatcher, RequestExtractor, TaskPlanner};
use crate::domain::workflow::stages::disaster_matching::DisasterMatchingStage;
use crate::domain::workflow::stages::intake::IntakeStage;
use crate::domain::workflow::stages::task_creation::TaskCreationStage;
use crate::error::ConversionError;

/// Everything the standard stages talk to.
#[derive(Clone)]
pub struct Collaborators {
    pub extractor: Arc<dyn RequestExtractor>,
    pub directory: Arc<dyn DisasterDirectory>,
    pub matcher: Arc<dyn DisasterMatcher>,
    pub planner: Arc<dyn TaskPlanner>,
    pub candidates: CandidateProviders,
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").field("candidates", &self.candidates).finish_non_exhaustive()
    }
}

/// Stage implementations by kind. Graphs look their nodes up here when they are built.
#[derive(Debug, Default, Clone)]
pub struct StageRegistry {
    stages: HashMap<StageKind, Arc<dyn Stage>>,
}

impl StageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the standard stage for every kind.
    pub fn from_collaborators(collaborators: Collaborators) -> Self {
        let mut registry = Self::new();
        registry.register(StageKind::Intake, Arc::new(IntakeStage::new(collaborators.extractor, collaborators.directory.clone())));
        registry.register(StageKind::DisasterMatching, Arc::new(DisasterMatchingStage::new(collaborators.directory, collaborators.matcher)));
        registry.register(StageKind::TaskCreation, Arc::new(TaskCreationStage::new(collaborators.planner)));
        registry.register(StageKind::Allocation, Arc::new(AllocationStage::new(AllocationEngine::new(collaborators.candidates))));
        registry
    }

    /// Adds or replaces the stage for `kind`.
    pub fn register(&mut self, kind: StageKind, stage: Arc<dyn Stage>) -> &mut Self {
        self.stages.insert(kind, stage);
        self
    }

    pub fn get(&self, kind: StageKind) -> Result<Arc<dyn Stage>, ConversionError> {
        self.stages.get(&kind).cloned().ok_or_else(|| ConversionError::UnregisteredStage(kind.to_string()))
    }
}
