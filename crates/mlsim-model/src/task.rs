//! Business problem selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::fields;

/// The kind of machine-learning task the learner picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Classification,
    Regression,
    Clustering,
}

impl TaskType {
    pub const ALL: [TaskType; 3] = [Self::Classification, Self::Regression, Self::Clustering];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classification => "Classification",
            Self::Regression => "Regression",
            Self::Clustering => "Clustering",
        }
    }

    /// The business question shown when choosing the task.
    pub fn business_problem(&self) -> &'static str {
        match self {
            Self::Classification => "Predict High-Margin Sales",
            Self::Regression => "Forecast Gross Profit",
            Self::Clustering => "Group Similar Locations",
        }
    }

    /// Label column the task learns, if it is supervised.
    pub fn target_field(&self) -> Option<&'static str> {
        match self {
            Self::Classification => Some(fields::MARGIN_ABOVE_MEDIAN),
            Self::Regression => Some(fields::GROSS_PROFIT),
            Self::Clustering => None,
        }
    }

    pub fn is_supervised(&self) -> bool {
        self.target_field().is_some()
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = ModelError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classification" => Ok(Self::Classification),
            "regression" => Ok(Self::Regression),
            "clustering" => Ok(Self::Clustering),
            _ => Err(ModelError::UnknownTask(s.to_string())),
        }
    }
}
