//! Cardinality reduction.

use std::collections::HashMap;

use mlsim_model::{Dataset, Value, fields};
use tracing::debug;

use super::{PreprocessStep, StepKind, StepReport};

/// Catch-all value rare categories are rewritten to.
pub const OTHER_CATEGORY: &str = "Other";

/// Categories seen fewer times than this are considered rare.
pub const RARE_CATEGORY_THRESHOLD: usize = 2;

/// Rewrites rare values of a categorical field to [`OTHER_CATEGORY`].
///
/// Counts come from the snapshot passed to [`apply`](PreprocessStep::apply) and
/// are taken once: collapsing several rare values into `"Other"` does not
/// trigger a recount, even if `"Other"` itself ends up rare.
#[derive(Debug, Clone)]
pub struct CardinalityReducer {
    field: String,
    threshold: usize,
}

impl Default for CardinalityReducer {
    fn default() -> Self {
        Self::new(fields::PARENT_NAME)
    }
}

impl CardinalityReducer {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            threshold: RARE_CATEGORY_THRESHOLD,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Rare categories in first-seen order.
    fn rare_categories(&self, dataset: &Dataset) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for value in dataset
            .column_values(&self.field)
            .filter_map(|value| value.and_then(Value::as_str))
        {
            let count = counts.entry(value).or_insert(0);
            if *count == 0 {
                order.push(value);
            }
            *count += 1;
        }
        order
            .into_iter()
            .filter(|category| counts.get(category).is_some_and(|&n| n < self.threshold))
            .map(str::to_string)
            .collect()
    }
}

impl PreprocessStep for CardinalityReducer {
    fn kind(&self) -> StepKind {
        StepKind::CardinalityReduction
    }

    fn apply(&self, dataset: &Dataset) -> (Dataset, StepReport) {
        let collapsed = self.rare_categories(dataset);
        let mut rewritten_records = 0usize;
        let reduced = dataset.map_records(|record| {
            let is_rare = record
                .get(&self.field)
                .and_then(Value::as_str)
                .is_some_and(|category| collapsed.iter().any(|rare| rare == category));
            let mut record = record.clone();
            if is_rare {
                record.insert(self.field.as_str(), OTHER_CATEGORY);
                rewritten_records += 1;
            }
            record
        });
        debug!(
            field = %self.field,
            collapsed = collapsed.len(),
            rewritten_records,
            "collapsed rare categories"
        );
        (
            reduced,
            StepReport::CardinalityReduction {
                collapsed,
                rewritten_records,
            },
        )
    }
}
