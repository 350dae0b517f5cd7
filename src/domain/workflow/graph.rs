use bimap::BiHashMap;
use slotmap::{SecondaryMap, SlotMap, new_key_type};
use std::str::FromStr;
use std::sync::Arc;

use crate::api::graph_dto::{EdgeDto, WorkflowGraphDto};
use crate::domain::utils::id::NodeName;
use crate::domain::workflow::action::Action;
use crate::domain::workflow::router::{ConditionalEdge, Edge, Target};
use crate::domain::workflow::stage_kind::StageKind;
use crate::domain::workflow::stage_registry::StageRegistry;
use crate::domain::workflow::stage_trait::Stage;
use crate::domain::workflow::workflow_state::WorkflowState;
use crate::error::{ConversionError, Result};

new_key_type! {
    pub struct NodeKey;
}

/// Name of the start sentinel in graph configurations.
pub const START: &str = "start";
/// Name of the terminal sentinel in graph configurations.
pub const END: &str = "__end__";

pub const DEFAULT_MAX_STEPS: usize = 25;

#[derive(Debug, Clone)]
pub struct GraphNode {
    pub name: NodeName,
    pub kind: StageKind,
    pub stage: Arc<dyn Stage>,
}

/// A validated graph of stage nodes.
///
/// The start sentinel has exactly one outgoing edge and so does every node.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    nodes: SlotMap<NodeKey, GraphNode>,

    /// Lookup between the configured node names and internal keys.
    name_index: BiHashMap<NodeName, NodeKey>,

    edges: SecondaryMap<NodeKey, Edge>,
    start: Edge,
    max_steps: usize,
}

impl WorkflowGraph {
    pub fn builder(registry: &StageRegistry) -> GraphBuilder<'_> {
        GraphBuilder::new(registry)
    }

    /// The default disaster response graph.
    ///
    /// The start sentinel dispatches on `next_action`, so a run can resume at any
    /// stage and a state without `next_action` ends immediately.
    pub fn standard(registry: &StageRegistry) -> Result<Self> {
        Self::builder(registry)
            .node("agent_intake", StageKind::Intake)
            .node("agent_disaster", StageKind::DisasterMatching)
            .node("agent_task", StageKind::TaskCreation)
            .node("agent_allocation", StageKind::Allocation)
            .conditional_edge(
                START,
                [
                    (Action::RequestExtraction, "agent_intake"),
                    (Action::DisasterAssignment, "agent_disaster"),
                    (Action::IncidentAssignment, "agent_disaster"),
                    (Action::TaskCreation, "agent_task"),
                    (Action::TaskAllocation, "agent_allocation"),
                ],
            )
            .conditional_edge("agent_intake", [(Action::DisasterAssignment, "agent_disaster"), (Action::TaskCreation, "agent_task")])
            .conditional_edge("agent_disaster", [(Action::TaskCreation, "agent_task")])
            .conditional_edge("agent_task", [(Action::TaskAllocation, "agent_allocation")])
            .direct_edge("agent_allocation", END)
            .build()
    }

    /// Builds a graph from its configuration file representation.
    pub fn from_dto(dto: WorkflowGraphDto, registry: &StageRegistry) -> Result<Self> {
        let mut builder = Self::builder(registry);

        if let Some(max_steps) = dto.max_steps {
            builder = builder.max_steps(max_steps);
        }

        for node in dto.nodes {
            let kind = StageKind::from_str(&node.stage)?;
            builder = builder.node(node.name, kind);
        }

        for edge in dto.edges {
            builder = match edge {
                EdgeDto::Direct { from, to } => builder.direct_edge(from, to),
                EdgeDto::Conditional { from, to } => {
                    let routes = to
                        .into_iter()
                        .map(|(action, target)| -> Result<(Action, String)> { Ok((Action::from_str(&action)?, target)) })
                        .collect::<Result<Vec<_>>>()?;
                    builder.conditional_edge(from, routes)
                }
            };
        }

        builder.build()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn node(&self, key: NodeKey) -> Option<&GraphNode> {
        self.nodes.get(key)
    }

    pub fn node_key(&self, name: &NodeName) -> Option<NodeKey> {
        self.name_index.get_by_left(name).copied()
    }

    pub fn node_name(&self, key: NodeKey) -> Option<&NodeName> {
        self.name_index.get_by_right(&key)
    }

    /// Where a run with this state enters the graph.
    pub fn route_from_start(&self, state: &WorkflowState) -> Target {
        self.start.next(state)
    }

    /// Where the run goes after `key` has handled the state.
    pub fn route(&self, key: NodeKey, state: &WorkflowState) -> Target {
        self.edges.get(key).map(|edge| edge.next(state)).unwrap_or(Target::End)
    }
}

#[derive(Debug, Clone)]
enum PendingEdge {
    Direct(String),
    Conditional(Vec<(Action, String)>),
}

/// Collects nodes and edges by name and validates them in [`GraphBuilder::build`].
pub struct GraphBuilder<'r> {
    registry: &'r StageRegistry,
    nodes: Vec<(String, StageKind)>,
    edges: Vec<(String, PendingEdge)>,
    max_steps: usize,
}

impl<'r> GraphBuilder<'r> {
    pub fn new(registry: &'r StageRegistry) -> Self {
        Self { registry, nodes: Vec::new(), edges: Vec::new(), max_steps: DEFAULT_MAX_STEPS }
    }

    pub fn node(mut self, name: impl Into<String>, kind: StageKind) -> Self {
        self.nodes.push((name.into(), kind));
        self
    }

    pub fn direct_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), PendingEdge::Direct(to.into())));
        self
    }

    pub fn conditional_edge<S, I>(mut self, from: impl Into<String>, routes: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (Action, S)>,
    {
        let routes = routes.into_iter().map(|(action, to)| (action, to.into())).collect();
        self.edges.push((from.into(), PendingEdge::Conditional(routes)));
        self
    }

    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn build(self) -> Result<WorkflowGraph> {
        let mut nodes: SlotMap<NodeKey, GraphNode> = SlotMap::with_key();
        let mut name_index: BiHashMap<NodeName, NodeKey> = BiHashMap::new();

        for (name, kind) in self.nodes {
            let node_name = NodeName::new(name.as_str());
            if name == START || name == END || name_index.contains_left(&node_name) {
                return Err(ConversionError::DuplicateNode(name).into());
            }

            let stage = self.registry.get(kind)?;
            let key = nodes.insert(GraphNode { name: node_name.clone(), kind, stage });
            name_index.insert(node_name, key);
        }

        let resolve = |name: &str| -> std::result::Result<Target, ConversionError> {
            if name == END {
                return Ok(Target::End);
            }
            name_index.get_by_left(&NodeName::new(name)).map(|key| Target::Node(*key)).ok_or_else(|| ConversionError::UnknownNode(name.to_string()))
        };

        let mut start: Option<Edge> = None;
        let mut edges: SecondaryMap<NodeKey, Edge> = SecondaryMap::new();

        for (from, pending) in self.edges {
            let edge = match pending {
                PendingEdge::Direct(to) => Edge::Direct(resolve(&to)?),
                PendingEdge::Conditional(routes) => {
                    let mut conditional = ConditionalEdge::new();
                    for (action, to) in routes {
                        conditional = conditional.with_route(action, resolve(&to)?);
                    }
                    Edge::Conditional(conditional)
                }
            };

            if from == START {
                if start.replace(edge).is_some() {
                    return Err(ConversionError::DuplicateEdge(from).into());
                }
                continue;
            }

            let key = match resolve(&from)? {
                Target::Node(key) => key,
                Target::End => return Err(ConversionError::UnknownNode(from).into()),
            };
            if edges.insert(key, edge).is_some() {
                return Err(ConversionError::DuplicateEdge(from).into());
            }
        }

        let start = start.ok_or(ConversionError::MissingStartEdge)?;

        if let Some((_, node)) = nodes.iter().find(|(key, _)| !edges.contains_key(*key)) {
            return Err(ConversionError::DeadEndNode(node.name.to_string()).into());
        }

        log::debug!("Built workflow graph with {} nodes, step limit {}.", nodes.len(), self.max_steps);

        Ok(WorkflowGraph { nodes, name_index, edges, start, max_steps: self.max_steps })
    }
}
