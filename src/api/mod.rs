pub mod candidate_dto;
pub mod graph_dto;
