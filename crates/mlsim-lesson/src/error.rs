//! Error types for the guided workflow and the analogy quiz.

use std::time::Duration;

use mlsim_model::ModelError;
use thiserror::Error;

use crate::workflow::WorkflowStage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("no business problem selected")]
    NoTaskSelected,
    #[error("cannot {action} during the {stage} stage")]
    InvalidTransition {
        stage: WorkflowStage,
        action: &'static str,
    },
    #[error("model training still in progress ({remaining:?} remaining)")]
    TrainingInProgress { remaining: Duration },
    #[error(transparent)]
    Config(#[from] ModelError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("'{item}' is not part of the current analogy")]
    UnknownItem { item: String },
    #[error("unknown choice '{0}' (expected algorithm or model)")]
    UnknownChoice(String),
    #[error("both items need an answer before checking")]
    IncompleteSelection,
    #[error("answer already checked, move to the next analogy first")]
    AlreadyChecked,
}

pub type Result<T, E = WorkflowError> = std::result::Result<T, E>;
