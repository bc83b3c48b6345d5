//! Tests for mlsim-model types.

use mlsim_model::{PreprocessingConfig, TaskType, Value, baseline_dataset, fields};

#[test]
fn baseline_category_counts() {
    let dataset = baseline_dataset();
    let count = |name: &str| {
        dataset
            .column_values(fields::PARENT_NAME)
            .filter(|value| value.and_then(Value::as_str) == Some(name))
            .count()
    };
    assert_eq!(count("Electronics"), 3);
    assert_eq!(count("Groceries"), 2);
    assert_eq!(count("Apparel"), 2);
    assert_eq!(count("Home Goods"), 2);
    assert_eq!(count("Books"), 1);
    assert_eq!(count("Toys"), 1);
    assert_eq!(count("Tools"), 1);
    assert_eq!(count("Jewelry"), 0);
}

#[test]
fn baseline_ids_are_sequential() {
    let ids: Vec<_> = baseline_dataset()
        .column_values(fields::ID)
        .map(|value| value.cloned())
        .collect();
    let expected: Vec<_> = (1..=12).map(|id| Some(Value::Int(id))).collect();
    assert_eq!(ids, expected);
}

#[test]
fn config_round_trips_through_toml() {
    let config = PreprocessingConfig::all_steps().with_split(80);
    let text = toml::to_string(&config).expect("serialize config");
    let parsed: PreprocessingConfig = toml::from_str(&text).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn task_serializes_lowercase() {
    let json = serde_json::to_string(&TaskType::Clustering).expect("serialize task");
    assert_eq!(json, r#""clustering""#);
    let parsed: TaskType = serde_json::from_str(r#""regression""#).expect("parse task");
    assert_eq!(parsed, TaskType::Regression);
}
