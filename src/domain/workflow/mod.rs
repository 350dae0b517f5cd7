pub mod action;
pub mod executor;
pub mod graph;
pub mod router;
pub mod stage_kind;
pub mod stage_registry;
pub mod stage_trait;
pub mod stages;
pub mod workflow_state;
