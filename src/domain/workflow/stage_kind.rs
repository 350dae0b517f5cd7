use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;

/// The stage implementations a graph configuration can refer to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Intake,
    DisasterMatching,
    TaskCreation,
    Allocation,
}

impl StageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Intake => "intake",
            StageKind::DisasterMatching => "disaster_matching",
            StageKind::TaskCreation => "task_creation",
            StageKind::Allocation => "allocation",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageKind {
    type Err = ConversionError;

    fn from_str(stage_kind: &str) -> Result<StageKind, Self::Err> {
        match stage_kind {
            "intake" | "agent_intake" => Ok(StageKind::Intake),
            "disaster_matching" | "incident_matching" | "agent_disaster" => Ok(StageKind::DisasterMatching),
            "task_creation" | "agent_task" => Ok(StageKind::TaskCreation),
            "allocation" | "agent_allocation" => Ok(StageKind::Allocation),
            _ => Err(ConversionError::UnknownStageKind(stage_kind.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_and_agent_names() {
        assert_eq!("intake".parse::<StageKind>(), Ok(StageKind::Intake));
        assert_eq!("agent_disaster".parse::<StageKind>(), Ok(StageKind::DisasterMatching));
        assert_eq!("allocation".parse::<StageKind>(), Ok(StageKind::Allocation));
        assert_eq!("orchestrator".parse::<StageKind>(), Err(ConversionError::UnknownStageKind("orchestrator".to_string())));
    }
}
