//! Polars bridge for projected views.

use mlsim_model::Value;
use polars::prelude::{Column, DataFrame, NamedFrom, PlSmallStr, PolarsResult, Series};

use crate::projection::ProjectedView;

/// Name of the extra column carrying each row's partition.
pub const SPLIT_COLUMN: &str = "split";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

fn column_kind<'a>(cells: impl Iterator<Item = Option<&'a Value>>) -> ColumnKind {
    let mut kind = ColumnKind::Int;
    for value in cells.flatten() {
        match value {
            Value::Int(_) => {}
            Value::Float(_) => kind = ColumnKind::Float,
            Value::Text(_) => return ColumnKind::Text,
        }
    }
    kind
}

impl ProjectedView {
    /// Build a [`DataFrame`] with one column per header plus [`SPLIT_COLUMN`].
    ///
    /// A column is Int64 when every present cell is an integer, Float64 when
    /// every present cell is numeric, and String otherwise. Absent cells are
    /// nulls.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.headers.len() + 1);
        for (idx, header) in self.headers.iter().enumerate() {
            let cells = || self.rows.iter().map(move |row| row[idx].as_ref());
            let name = PlSmallStr::from(header.as_str());
            let series = match column_kind(cells()) {
                ColumnKind::Int => {
                    let values: Vec<Option<i64>> = cells()
                        .map(|cell| match cell {
                            Some(Value::Int(value)) => Some(*value),
                            _ => None,
                        })
                        .collect();
                    Series::new(name, values)
                }
                ColumnKind::Float => {
                    let values: Vec<Option<f64>> =
                        cells().map(|cell| cell.and_then(Value::as_f64)).collect();
                    Series::new(name, values)
                }
                ColumnKind::Text => {
                    let values: Vec<Option<String>> = cells()
                        .map(|cell| cell.map(ToString::to_string))
                        .collect();
                    Series::new(name, values)
                }
            };
            columns.push(series.into());
        }

        let split: Vec<&str> = (0..self.rows.len())
            .map(|row| self.partition(row).as_str())
            .collect();
        columns.push(Series::new(SPLIT_COLUMN.into(), split).into());
        DataFrame::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlsim_model::{Dataset, Record};
    use polars::prelude::DataType;

    use crate::projection::project;

    #[test]
    fn column_types_follow_cells() {
        let dataset: Dataset = vec![
            Record::new().with("id", 1).with("cost", 2.5).with("city", "Boston"),
            Record::new().with("id", 2).with("cost", 3).with("city", "Miami"),
        ]
        .into_iter()
        .collect();
        let frame = project(&dataset, None, 50).to_frame().expect("frame");

        assert_eq!(frame.shape(), (2, 4));
        assert_eq!(frame.column("id").expect("id").dtype(), &DataType::Int64);
        assert_eq!(frame.column("cost").expect("cost").dtype(), &DataType::Float64);
        assert_eq!(frame.column("city").expect("city").dtype(), &DataType::String);
        let split = frame
            .column(SPLIT_COLUMN)
            .expect("split")
            .as_materialized_series()
            .str()
            .expect("utf8")
            .clone();
        assert_eq!(split.get(0), Some("train"));
        assert_eq!(split.get(1), Some("test"));
    }

    #[test]
    fn empty_view_has_only_split_column() {
        let frame = project(&Dataset::default(), None, 70)
            .to_frame()
            .expect("frame");
        assert_eq!(frame.shape(), (0, 1));
    }
}
