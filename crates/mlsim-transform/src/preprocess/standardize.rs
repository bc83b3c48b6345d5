//! Z-score standardization of numeric fields.

use mlsim_model::{Dataset, Value, fields};
use serde::Serialize;
use tracing::debug;

use super::{PreprocessStep, StepKind, StepReport};

/// Population moments of one column, as used for scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnMoments {
    pub column: &'static str,
    pub mean: f64,
    /// Population standard deviation (divides by N).
    pub std: f64,
}

/// Rescales numeric fields to `(value - mean) / std`.
///
/// Columns are processed one after another, each over the current snapshot.
/// A zero standard deviation is not guarded: the division yields NaN or
/// infinity and those values are stored as-is. Missing or non-numeric cells
/// read as NaN.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    columns: Vec<&'static str>,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new(fields::NUMERIC_FIELDS.to_vec())
    }
}

impl StandardScaler {
    pub fn new(columns: Vec<&'static str>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }
}

fn numeric_cell(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(f64::NAN)
}

/// Population mean and standard deviation of a column.
pub fn column_moments(dataset: &Dataset, column: &'static str) -> ColumnMoments {
    let values: Vec<f64> = dataset.column_values(column).map(numeric_cell).collect();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    ColumnMoments {
        column,
        mean,
        std: variance.sqrt(),
    }
}

impl PreprocessStep for StandardScaler {
    fn kind(&self) -> StepKind {
        StepKind::Standardization
    }

    fn apply(&self, dataset: &Dataset) -> (Dataset, StepReport) {
        let mut current = dataset.clone();
        let mut columns = Vec::with_capacity(self.columns.len());
        for &column in &self.columns {
            let moments = column_moments(&current, column);
            if moments.std == 0.0 {
                debug!(column, "zero variance column, scaled values are not finite");
            }
            current = current.map_records(|record| {
                let mut record = record.clone();
                let scaled = (numeric_cell(record.get(column)) - moments.mean) / moments.std;
                record.insert(column, scaled);
                record
            });
            debug!(column, mean = moments.mean, std = moments.std, "standardized column");
            columns.push(moments);
        }
        (current, StepReport::Standardization { columns })
    }
}
