//! One-hot encoding of a categorical field.

use mlsim_model::{Dataset, Value, fields};
use tracing::debug;

use super::{PreprocessStep, StepKind, StepReport};

/// Name of the indicator field for one value of `field`.
///
/// Spaces in the value become underscores, so `location` / `"New York"`
/// maps to `location_New_York`.
pub fn indicator_name(field: &str, value: &str) -> String {
    format!("{field}_{}", value.replace(' ', "_"))
}

/// Replaces a categorical field with one 0/1 field per distinct value.
///
/// Distinct values are collected from the snapshot in first-seen order and
/// indicator fields are appended in that order. The source field is removed.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    field: String,
}

impl Default for OneHotEncoder {
    fn default() -> Self {
        Self::new(fields::LOCATION)
    }
}

impl OneHotEncoder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    fn distinct_values<'a>(&'a self, dataset: &'a Dataset) -> Vec<&'a str> {
        let mut distinct: Vec<&str> = Vec::new();
        for value in dataset
            .column_values(&self.field)
            .filter_map(|value| value.and_then(Value::as_str))
        {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }
        distinct
    }
}

impl PreprocessStep for OneHotEncoder {
    fn kind(&self) -> StepKind {
        StepKind::OneHotEncoding
    }

    fn apply(&self, dataset: &Dataset) -> (Dataset, StepReport) {
        let distinct = self.distinct_values(dataset);
        let indicators: Vec<String> = distinct
            .iter()
            .map(|value| indicator_name(&self.field, value))
            .collect();

        let encoded = dataset.map_records(|record| {
            let mut record = record.clone();
            let source = record.remove(&self.field);
            let source = source.as_ref().and_then(Value::as_str);
            for (value, indicator) in distinct.iter().zip(&indicators) {
                let hot = i64::from(source == Some(*value));
                record.insert(indicator.as_str(), hot);
            }
            record
        });
        debug!(
            field = %self.field,
            indicators = indicators.len(),
            "one-hot encoded field"
        );
        (encoded, StepReport::OneHotEncoding { indicators })
    }
}
