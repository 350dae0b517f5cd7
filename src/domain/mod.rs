pub mod allocation;
pub mod model;
pub mod utils;
pub mod workflow;
