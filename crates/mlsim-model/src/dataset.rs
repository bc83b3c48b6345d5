//! Records and datasets.
//!
//! A [`Record`] is an ordered mapping from field name to [`Value`]. The field
//! set is not uniform across preprocessing stages (one-hot encoding drops
//! `location` and appends indicator fields), so records carry their own field
//! list instead of a fixed positional layout.

use crate::value::Value;

/// One row of the dataset.
///
/// Field order is insertion order. Replacing an existing field keeps its
/// position; removing a field keeps the relative order of the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.fields.iter().position(|(field, _)| field == name)?;
        Some(self.fields.remove(idx).1)
    }

    /// Field names in natural order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// An ordered sequence of records.
///
/// Order is meaningful: the train/test split takes the leading rows as the
/// training portion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Values of one field across all records; `None` where a record lacks it.
    pub fn column_values<'a>(&'a self, field: &'a str) -> impl Iterator<Item = Option<&'a Value>> {
        self.records.iter().map(move |record| record.get(field))
    }

    /// Build a new dataset by mapping every record, preserving order.
    #[must_use]
    pub fn map_records<F>(&self, f: F) -> Self
    where
        F: FnMut(&Record) -> Record,
    {
        Self {
            records: self.records.iter().map(f).collect(),
        }
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut record = Record::new().with("a", 1).with("b", 2).with("c", 3);
        let previous = record.insert("b", Value::Float(2.5));
        assert_eq!(previous, Some(Value::Int(2)));
        assert_eq!(record.field_names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(record.get("b"), Some(&Value::Float(2.5)));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut record = Record::new().with("a", 1).with("b", 2).with("c", 3);
        assert_eq!(record.remove("b"), Some(Value::Int(2)));
        assert_eq!(record.remove("missing"), None);
        record.insert("d", 4);
        assert_eq!(record.field_names().collect::<Vec<_>>(), ["a", "c", "d"]);
    }

    #[test]
    fn column_values_reports_missing_fields() {
        let dataset = Dataset::new(vec![
            Record::new().with("x", 1),
            Record::new().with("y", 2),
        ]);
        let values: Vec<_> = dataset.column_values("x").collect();
        assert_eq!(values, [Some(&Value::Int(1)), None]);
    }
}
