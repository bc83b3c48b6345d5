//! Preprocessing configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Smallest accepted train/test split, in percent.
pub const MIN_SPLIT_PERCENT: u8 = 10;
/// Largest accepted train/test split, in percent.
pub const MAX_SPLIT_PERCENT: u8 = 90;
pub const DEFAULT_SPLIT_PERCENT: u8 = 70;

/// Which preprocessing steps are enabled, plus the train/test split ratio.
///
/// The toggles are independent. Enabled steps always run in the same order:
/// cardinality reduction, one-hot encoding, then standardization.
///
/// The configuration is a plain value: callers replace it wholesale on every
/// change and recompute from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingConfig {
    /// Collapse rare product categories into "Other".
    pub reduce_cardinality: bool,
    /// Expand `location` into per-value indicator fields.
    pub one_hot_encode: bool,
    /// Rescale `cost` and `units_sold` to zero mean, unit variance.
    pub standardize: bool,
    /// Percentage of leading rows used for training.
    pub train_test_split: u8,
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            reduce_cardinality: false,
            one_hot_encode: false,
            standardize: false,
            train_test_split: DEFAULT_SPLIT_PERCENT,
        }
    }
}

impl PreprocessingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// All steps enabled with the default split.
    pub fn all_steps() -> Self {
        Self {
            reduce_cardinality: true,
            one_hot_encode: true,
            standardize: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reduce_cardinality(mut self, enable: bool) -> Self {
        self.reduce_cardinality = enable;
        self
    }

    #[must_use]
    pub fn with_one_hot_encode(mut self, enable: bool) -> Self {
        self.one_hot_encode = enable;
        self
    }

    #[must_use]
    pub fn with_standardize(mut self, enable: bool) -> Self {
        self.standardize = enable;
        self
    }

    #[must_use]
    pub fn with_split(mut self, percent: u8) -> Self {
        self.train_test_split = percent;
        self
    }

    /// True when no transformation step is enabled.
    pub fn is_identity(&self) -> bool {
        !(self.reduce_cardinality || self.one_hot_encode || self.standardize)
    }

    /// Check the split ratio against the accepted range.
    ///
    /// The preprocessing engine itself never validates; this is for callers
    /// that accept user input.
    pub fn validate(&self) -> Result<()> {
        if (MIN_SPLIT_PERCENT..=MAX_SPLIT_PERCENT).contains(&self.train_test_split) {
            Ok(())
        } else {
            Err(ModelError::SplitRatioOutOfRange {
                value: self.train_test_split,
                min: MIN_SPLIT_PERCENT,
                max: MAX_SPLIT_PERCENT,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity_with_seventy_percent_split() {
        let config = PreprocessingConfig::default();
        assert!(config.is_identity());
        assert_eq!(config.train_test_split, 70);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_split() {
        assert!(PreprocessingConfig::new().with_split(10).validate().is_ok());
        assert!(PreprocessingConfig::new().with_split(90).validate().is_ok());
        assert_eq!(
            PreprocessingConfig::new().with_split(95).validate(),
            Err(ModelError::SplitRatioOutOfRange {
                value: 95,
                min: 10,
                max: 90
            })
        );
        assert!(PreprocessingConfig::new().with_split(0).validate().is_err());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: PreprocessingConfig =
            toml::from_str("standardize = true").expect("parse partial config");
        assert!(config.standardize);
        assert!(!config.reduce_cardinality);
        assert_eq!(config.train_test_split, DEFAULT_SPLIT_PERCENT);
    }
}
