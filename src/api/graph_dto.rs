use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Workflow graph configuration file.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowGraphDto {
    #[serde(default)]
    pub max_steps: Option<usize>,

    pub nodes: Vec<NodeDto>,
    pub edges: Vec<EdgeDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NodeDto {
    pub name: String,

    /// Name of the stage implementation, e.g. `intake` or `agent_allocation`.
    pub stage: String,
}

/// `"start"` and `"__end__"` name the start and terminal sentinels.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeDto {
    Direct { from: String, to: String },

    /// Maps action names to target nodes.
    Conditional { from: String, to: BTreeMap<String, String> },
}
