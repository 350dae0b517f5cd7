pub mod candidate_pool;
pub mod parser;
