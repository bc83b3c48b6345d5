//! The five-stage guided workflow.
//!
//! A session moves strictly forward through [`WorkflowStage`]:
//! choose a business problem, preprocess, train, evaluate, predict. The only
//! gate with a condition attached is Training → Evaluating, which opens a fixed
//! [`TRAINING_DELAY`] after training starts. Nothing is actually trained; the
//! delay is purely presentational.
//!
//! Time is passed in as an [`Instant`] so the gate can be driven
//! deterministically.

use std::fmt;
use std::time::{Duration, Instant};

use mlsim_model::{PreprocessingConfig, TaskType, baseline_dataset};
use mlsim_transform::{ProjectedView, project, transform};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, WorkflowError};

/// Time between entering Training and the model reporting as trained.
pub const TRAINING_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    ChoosingTask,
    Preprocessing,
    Training,
    Evaluating,
    Predicting,
}

impl WorkflowStage {
    pub const ALL: [WorkflowStage; 5] = [
        Self::ChoosingTask,
        Self::Preprocessing,
        Self::Training,
        Self::Evaluating,
        Self::Predicting,
    ];

    /// Zero-based position in the workflow.
    pub fn index(&self) -> usize {
        match self {
            Self::ChoosingTask => 0,
            Self::Preprocessing => 1,
            Self::Training => 2,
            Self::Evaluating => 3,
            Self::Predicting => 4,
        }
    }

    /// Progress bar fill: 0 on the first stage, 100 on the last.
    pub fn progress_percent(&self) -> f64 {
        self.index() as f64 / (Self::ALL.len() - 1) as f64 * 100.0
    }

    pub fn next(&self) -> Option<WorkflowStage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChoosingTask => "choose task",
            Self::Preprocessing => "preprocessing",
            Self::Training => "training",
            Self::Evaluating => "evaluation",
            Self::Predicting => "prediction",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one walk through the workflow.
#[derive(Debug, Clone)]
pub struct WorkflowSession {
    task: Option<TaskType>,
    config: PreprocessingConfig,
    stage: WorkflowStage,
    training_started: Option<Instant>,
}

impl Default for WorkflowSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowSession {
    pub fn new() -> Self {
        Self {
            task: None,
            config: PreprocessingConfig::default(),
            stage: WorkflowStage::ChoosingTask,
            training_started: None,
        }
    }

    pub fn task(&self) -> Option<TaskType> {
        self.task
    }

    pub fn config(&self) -> &PreprocessingConfig {
        &self.config
    }

    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    pub fn progress_percent(&self) -> f64 {
        self.stage.progress_percent()
    }

    /// Select the business problem and move on to preprocessing.
    pub fn start(&mut self, task: TaskType) -> Result<()> {
        self.require(WorkflowStage::ChoosingTask, "choose a business problem")?;
        self.task = Some(task);
        self.enter(WorkflowStage::Preprocessing);
        Ok(())
    }

    /// Replace the preprocessing configuration wholesale.
    pub fn set_config(&mut self, config: PreprocessingConfig) -> Result<()> {
        self.require(WorkflowStage::Preprocessing, "change preprocessing")?;
        config.validate()?;
        self.config = config;
        debug!(?config, "preprocessing configuration replaced");
        Ok(())
    }

    /// The data table for the current task and configuration.
    pub fn view(&self) -> ProjectedView {
        let transformed = transform(&baseline_dataset(), &self.config);
        project(&transformed, self.task, self.config.train_test_split)
    }

    /// Time left before training completes, `None` outside the Training stage.
    pub fn training_remaining(&self, now: Instant) -> Option<Duration> {
        if self.stage != WorkflowStage::Training {
            return None;
        }
        let started = self.training_started?;
        Some(TRAINING_DELAY.saturating_sub(now.saturating_duration_since(started)))
    }

    /// Whether the model counts as trained at `now`.
    pub fn is_trained(&self, now: Instant) -> bool {
        match self.stage {
            WorkflowStage::ChoosingTask | WorkflowStage::Preprocessing => false,
            WorkflowStage::Training => self
                .training_remaining(now)
                .is_some_and(|remaining| remaining.is_zero()),
            WorkflowStage::Evaluating | WorkflowStage::Predicting => true,
        }
    }

    /// Move to the next stage.
    ///
    /// Leaving Training is refused until [`TRAINING_DELAY`] has elapsed since
    /// it was entered. Predicting is terminal; use [`reset`](Self::reset).
    pub fn advance(&mut self, now: Instant) -> Result<WorkflowStage> {
        match self.stage {
            WorkflowStage::ChoosingTask => return Err(WorkflowError::NoTaskSelected),
            WorkflowStage::Preprocessing => {
                self.training_started = Some(now);
            }
            WorkflowStage::Training => {
                if let Some(remaining) = self.training_remaining(now)
                    && !remaining.is_zero()
                {
                    return Err(WorkflowError::TrainingInProgress { remaining });
                }
            }
            WorkflowStage::Evaluating => {}
            WorkflowStage::Predicting => {
                return Err(WorkflowError::InvalidTransition {
                    stage: self.stage,
                    action: "advance",
                });
            }
        }
        let next = self.stage.next().ok_or(WorkflowError::InvalidTransition {
            stage: self.stage,
            action: "advance",
        })?;
        self.enter(next);
        Ok(next)
    }

    /// Start over: no task, default configuration, first stage.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("workflow reset");
    }

    fn enter(&mut self, stage: WorkflowStage) {
        debug!(from = %self.stage, to = %stage, "workflow stage changed");
        self.stage = stage;
    }

    fn require(&self, stage: WorkflowStage, action: &'static str) -> Result<()> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(WorkflowError::InvalidTransition {
                stage: self.stage,
                action,
            })
        }
    }
}
