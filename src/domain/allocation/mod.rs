pub mod candidate_snapshot;
pub mod distance_ranking;
pub mod engine;
pub mod provider_trait;
