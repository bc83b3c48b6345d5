//! Guided lesson around the preprocessing engine.
//!
//! - **workflow**: the five-stage session and its training timer
//! - **content**: key concepts, step catalog, scripted evaluation and prediction
//! - **quiz**: the algorithm-vs-model analogy quiz
//! - **error**: [`WorkflowError`] and [`QuizError`]

pub mod content;
pub mod error;
pub mod quiz;
pub mod workflow;

pub use content::{
    Concept, ConceptIcon, ConfusionMatrix, Evaluation, KEY_CONCEPTS, Prediction, WORKFLOW_STEPS,
    WorkflowStep, evaluation, prediction, workflow_step,
};
pub use error::{QuizError, Result, WorkflowError};
pub use quiz::{ANALOGIES, Analogy, AnalogyChoice, AnalogyQuiz, Feedback};
pub use workflow::{TRAINING_DELAY, WorkflowSession, WorkflowStage};
