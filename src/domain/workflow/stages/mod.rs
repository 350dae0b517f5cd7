pub mod allocation;
pub mod collaborator_trait;
pub mod disaster_matching;
pub mod intake;
pub mod offline;
pub mod task_creation;
