//! Preprocessing pipeline.
//!
//! The pipeline is assembled from a [`PreprocessingConfig`]: every enabled step
//! is added in the fixed order cardinality reduction → one-hot encoding →
//! standardization. Order matters: cardinality reduction rewrites category
//! values before any reshaping, and standardization reads numeric columns the
//! other two steps never touch.
//!
//! Every run starts from the baseline snapshot; there is no incremental
//! update.
//!
//! # Example
//!
//! ```
//! use mlsim_model::{PreprocessingConfig, baseline_dataset};
//! use mlsim_transform::pipeline::transform;
//!
//! let config = PreprocessingConfig::new().with_reduce_cardinality(true);
//! let transformed = transform(&baseline_dataset(), &config);
//! assert_eq!(transformed.len(), 12);
//! ```

use mlsim_model::{Dataset, PreprocessingConfig};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::preprocess::{
    CardinalityReducer, OneHotEncoder, PreprocessStep, StandardScaler, StepKind, StepReport,
};

/// Ordered chain of preprocessing steps.
#[derive(Default)]
pub struct PreprocessingPipeline {
    steps: Vec<Box<dyn PreprocessStep>>,
}

/// Result of running a pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub dataset: Dataset,
    pub report: PipelineReport,
}

/// Per-step summary of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineReport {
    pub input_records: usize,
    pub output_fields: usize,
    pub steps: Vec<StepReport>,
}

impl PipelineReport {
    pub fn applied(&self) -> impl Iterator<Item = StepKind> + '_ {
        self.steps.iter().map(StepReport::kind)
    }
}

impl PreprocessingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the pipeline for the enabled steps of `config`.
    pub fn from_config(config: &PreprocessingConfig) -> Self {
        let mut pipeline = Self::new();
        if config.reduce_cardinality {
            pipeline.add_step(CardinalityReducer::default());
        }
        if config.one_hot_encode {
            pipeline.add_step(OneHotEncoder::default());
        }
        if config.standardize {
            pipeline.add_step(StandardScaler::default());
        }
        pipeline
    }

    /// Append a step to the end of the pipeline.
    pub fn add_step<S: PreprocessStep + 'static>(&mut self, step: S) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn step_kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|step| step.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order over `baseline`.
    ///
    /// The input is never modified. With no steps the output equals the input.
    pub fn execute(&self, baseline: &Dataset) -> PipelineOutput {
        let span = info_span!("preprocess", records = baseline.len(), steps = self.steps.len());
        let _guard = span.enter();

        let mut dataset = baseline.clone();
        let mut steps = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let (next, report) = step.apply(&dataset);
            debug!(step = %step.kind(), records = next.len(), "applied preprocessing step");
            dataset = next;
            steps.push(report);
        }

        let report = PipelineReport {
            input_records: baseline.len(),
            output_fields: dataset.first().map_or(0, |record| record.len()),
            steps,
        };
        PipelineOutput { dataset, report }
    }
}

/// Apply the steps enabled in `config` to `baseline`.
pub fn transform(baseline: &Dataset, config: &PreprocessingConfig) -> Dataset {
    PreprocessingPipeline::from_config(config)
        .execute(baseline)
        .dataset
}
