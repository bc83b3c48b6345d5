//! Preprocessing steps.
//!
//! Each step is a pure transformation from one [`Dataset`] snapshot to a new
//! one. Steps never mutate their input.
//!
//! - **cardinality**: collapse rare categories into `"Other"`
//! - **one_hot**: expand a categorical field into 0/1 indicator fields
//! - **standardize**: rescale numeric fields to zero mean, unit population std

pub mod cardinality;
pub mod one_hot;
pub mod standardize;

use std::fmt;

use mlsim_model::Dataset;
use serde::Serialize;

pub use cardinality::{CardinalityReducer, OTHER_CATEGORY, RARE_CATEGORY_THRESHOLD};
pub use one_hot::{OneHotEncoder, indicator_name};
pub use standardize::{ColumnMoments, StandardScaler};

/// The kinds of preprocessing step, in their fixed application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StepKind {
    CardinalityReduction,
    OneHotEncoding,
    Standardization,
}

impl StepKind {
    /// Returns a human-readable display name for the step.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CardinalityReduction => "Reduce Cardinality",
            Self::OneHotEncoding => "One-Hot Encode",
            Self::Standardization => "Standardize Numerics",
        }
    }

    /// One-line explanation shown next to the toggle.
    pub fn description(&self) -> &'static str {
        match self {
            Self::CardinalityReduction => {
                "Group rare product categories into \"Other\" to reduce noise."
            }
            Self::OneHotEncoding => "Convert the 'location' column into numerical format.",
            Self::Standardization => {
                "Scale numerical features to have a mean of 0 and a standard deviation of 1."
            }
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What a step did to the snapshot it was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepReport {
    CardinalityReduction {
        /// Categories rewritten to `"Other"`, in first-seen order.
        collapsed: Vec<String>,
        rewritten_records: usize,
    },
    OneHotEncoding {
        /// Indicator fields appended to every record, in order.
        indicators: Vec<String>,
    },
    Standardization {
        columns: Vec<ColumnMoments>,
    },
}

impl StepReport {
    pub fn kind(&self) -> StepKind {
        match self {
            Self::CardinalityReduction { .. } => StepKind::CardinalityReduction,
            Self::OneHotEncoding { .. } => StepKind::OneHotEncoding,
            Self::Standardization { .. } => StepKind::Standardization,
        }
    }
}

/// A single transformation in the preprocessing pipeline.
pub trait PreprocessStep {
    fn kind(&self) -> StepKind;

    /// Produce a new snapshot from `dataset`, together with a report.
    fn apply(&self, dataset: &Dataset) -> (Dataset, StepReport);
}
