use std::collections::HashMap;

use crate::domain::workflow::action::Action;
use crate::domain::workflow::graph::NodeKey;
use crate::domain::workflow::workflow_state::WorkflowState;

/// Where the executor goes after a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Node(NodeKey),
    End,
}

/// Maps `next_action` values to targets. Anything unmapped, and an unset
/// `next_action`, ends the run.
#[derive(Debug, Clone, Default)]
pub struct ConditionalEdge {
    routes: HashMap<Action, Target>,
}

impl ConditionalEdge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, action: Action, target: Target) -> Self {
        self.routes.insert(action, target);
        self
    }

    pub fn route(&self, next_action: Option<Action>) -> Target {
        match next_action {
            Some(action) => self.routes.get(&action).copied().unwrap_or(Target::End),
            None => Target::End,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Edge {
    Direct(Target),
    Conditional(ConditionalEdge),
}

impl Edge {
    pub fn next(&self, state: &WorkflowState) -> Target {
        match self {
            Edge::Direct(target) => *target,
            Edge::Conditional(conditional) => conditional.route(state.next_action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn unmapped_or_missing_action_ends_the_run() {
        let mut keys: SlotMap<NodeKey, ()> = SlotMap::with_key();
        let allocation = keys.insert(());
        let edge = Edge::Conditional(ConditionalEdge::new().with_route(Action::TaskAllocation, Target::Node(allocation)));

        let mut state = WorkflowState { next_action: Some(Action::TaskAllocation), ..WorkflowState::default() };
        assert_eq!(edge.next(&state), Target::Node(allocation));

        state.next_action = Some(Action::TaskCreation);
        assert_eq!(edge.next(&state), Target::End);

        state.next_action = None;
        assert_eq!(edge.next(&state), Target::End);
    }

    #[test]
    fn direct_edge_ignores_the_state() {
        let edge = Edge::Direct(Target::End);
        let state = WorkflowState { next_action: Some(Action::TaskAllocation), ..WorkflowState::default() };
        assert_eq!(edge.next(&state), Target::End);
    }
}
