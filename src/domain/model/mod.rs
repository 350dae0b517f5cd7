pub mod allocation;
pub mod coordinates;
pub mod disaster;
pub mod request;
pub mod resource;
pub mod task;
pub mod types;
pub mod volunteer;
