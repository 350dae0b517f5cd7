use std::fmt;

use thiserror::Error;

use crate::domain::utils::id::{DisasterId, NodeName};

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write allocation report: {0}")]
    ReportError(#[from] csv::Error),

    #[error(transparent)]
    ConversionError(#[from] ConversionError),

    #[error("Workflow state is missing {0}")]
    MissingInput(MissingInput),

    #[error("Disaster {0} has no coordinates, candidates cannot be ranked")]
    MissingCoordinatesError(DisasterId),

    #[error("Disaster {0} has invalid coordinates, candidates cannot be ranked")]
    InvalidCoordinatesError(DisasterId),

    #[error("Collaborator '{collaborator}' failed: {message}")]
    CollaboratorError { collaborator: &'static str, message: String },

    #[error("Node {node} aborted the workflow run: {source}")]
    StageFailed {
        node: NodeName,
        #[source]
        source: Box<Error>,
    },

    #[error("Workflow run exceeded the step limit of {0}")]
    StepLimitExceeded(usize),
}

impl Error {
    pub fn collaborator(collaborator: &'static str, message: impl Into<String>) -> Self {
        Error::CollaboratorError { collaborator, message: message.into() }
    }

    /// Returns the error a stage produced, looking through the executor's `StageFailed` wrapper.
    pub fn root(&self) -> &Error {
        match self {
            Error::StageFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Inputs a stage or the allocation engine cannot proceed without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    Request,
    RequestCoordinates,
    Disaster,
    Tasks,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissingInput::Request => "the request",
            MissingInput::RequestCoordinates => "the request coordinates",
            MissingInput::Disaster => "the disaster",
            MissingInput::Tasks => "the task list",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown stage kind: {0}")]
    UnknownStageKind(String),

    #[error("No stage registered for kind {0}")]
    UnregisteredStage(String),

    #[error("Edge references unknown node: {0}")]
    UnknownNode(String),

    #[error("Node declared twice: {0}")]
    DuplicateNode(String),

    #[error("Node {0} has more than one outgoing edge")]
    DuplicateEdge(String),

    #[error("Graph has no edge leaving the start sentinel")]
    MissingStartEdge,

    #[error("Node {0} has no outgoing edge")]
    DeadEndNode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
