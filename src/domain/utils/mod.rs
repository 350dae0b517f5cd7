pub mod distance;
pub mod id;
