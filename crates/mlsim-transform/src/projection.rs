//! View projection: which columns to show and which rows train vs. test.
//!
//! All functions are pure and recomputed whenever the dataset, task or split
//! ratio changes.

use mlsim_model::{Dataset, TaskType, Value, fields};
use serde::Serialize;

/// One projected row; `None` where the record lacks a header's field.
pub type Row = Vec<Option<Value>>;

/// Fields hidden from the table for a task selection.
///
/// Classification hides the regression target, Regression hides the
/// classification flag, and Clustering hides both labels plus the category
/// name. No selection hides nothing.
pub fn hidden_fields(task: Option<TaskType>) -> &'static [&'static str] {
    match task {
        Some(TaskType::Classification) => &[fields::GROSS_PROFIT],
        Some(TaskType::Regression) => &[fields::MARGIN_ABOVE_MEDIAN],
        Some(TaskType::Clustering) => &[
            fields::GROSS_PROFIT,
            fields::MARGIN_ABOVE_MEDIAN,
            fields::PARENT_NAME,
        ],
        None => &[],
    }
}

/// Field names of the first record, in its natural order, minus the fields
/// hidden for `task`. Empty for an empty dataset.
pub fn project_headers(dataset: &Dataset, task: Option<TaskType>) -> Vec<String> {
    let Some(first) = dataset.first() else {
        return Vec::new();
    };
    let hidden = hidden_fields(task);
    first
        .field_names()
        .filter(|name| !hidden.contains(name))
        .map(str::to_string)
        .collect()
}

/// Each record's values in header order, preserving record order.
pub fn project_rows(dataset: &Dataset, headers: &[String]) -> Vec<Row> {
    dataset
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| record.get(header).cloned())
                .collect()
        })
        .collect()
}

/// Index of the first test row: `floor(row_count * percent / 100)`.
///
/// Rows before the index train, the rest test. Purely positional; nothing is
/// shuffled or stratified.
pub fn compute_split_index(row_count: usize, split_ratio_percent: u8) -> usize {
    row_count * usize::from(split_ratio_percent) / 100
}

/// Side of the train/test split a row falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Train,
    Test,
}

impl Partition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }
}

/// Everything the presentation layer needs to draw the data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedView {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub split_index: usize,
}

impl ProjectedView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn partition(&self, row: usize) -> Partition {
        if row < self.split_index {
            Partition::Train
        } else {
            Partition::Test
        }
    }

    pub fn train_rows(&self) -> &[Row] {
        &self.rows[..self.split_index.min(self.rows.len())]
    }

    pub fn test_rows(&self) -> &[Row] {
        &self.rows[self.split_index.min(self.rows.len())..]
    }
}

/// Project a transformed dataset for display.
pub fn project(dataset: &Dataset, task: Option<TaskType>, split_ratio_percent: u8) -> ProjectedView {
    let headers = project_headers(dataset, task);
    let rows = project_rows(dataset, &headers);
    let split_index = compute_split_index(rows.len(), split_ratio_percent);
    ProjectedView {
        headers,
        rows,
        split_index,
    }
}
