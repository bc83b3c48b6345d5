//! Simulator configuration from a TOML file plus command-line overrides.
//!
//! ```toml
//! task = "classification"
//!
//! [preprocessing]
//! reduce_cardinality = true
//! train_test_split = 80
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mlsim_model::{PreprocessingConfig, TaskType};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Task selection and preprocessing configuration for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    pub task: Option<TaskType>,
    pub preprocessing: PreprocessingConfig,
}

/// Values given on the command line. Toggles can only switch a step on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub task: Option<TaskType>,
    pub reduce_cardinality: bool,
    pub one_hot_encode: bool,
    pub standardize: bool,
    pub split: Option<u8>,
}

impl SimulatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse simulator config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("load config file {}", path.display()))?;
        info!(path = %path.display(), "loaded simulator config");
        Ok(config)
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if overrides.task.is_some() {
            self.task = overrides.task;
        }
        let preprocessing = &mut self.preprocessing;
        preprocessing.reduce_cardinality |= overrides.reduce_cardinality;
        preprocessing.one_hot_encode |= overrides.one_hot_encode;
        preprocessing.standardize |= overrides.standardize;
        if let Some(split) = overrides.split {
            preprocessing.train_test_split = split;
        }
        self
    }
}

/// Load the optional config file, apply overrides and validate the result.
pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<SimulatorConfig> {
    let base = match path {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };
    let config = base.with_overrides(overrides);
    config
        .preprocessing
        .validate()
        .context("invalid preprocessing configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = SimulatorConfig::from_toml_str("task = \"regression\"").unwrap();
        assert_eq!(config.task, Some(TaskType::Regression));
        assert_eq!(config.preprocessing, PreprocessingConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SimulatorConfig::from_toml_str("tsak = \"regression\"").is_err());
    }

    #[test]
    fn toggles_only_switch_on() {
        let base = SimulatorConfig {
            task: None,
            preprocessing: PreprocessingConfig::new().with_standardize(true),
        };
        let merged = base.with_overrides(&Overrides {
            one_hot_encode: true,
            ..Overrides::default()
        });
        assert!(merged.preprocessing.standardize);
        assert!(merged.preprocessing.one_hot_encode);
        assert!(!merged.preprocessing.reduce_cardinality);
    }
}
