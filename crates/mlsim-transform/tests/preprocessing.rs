//! Preprocessing over the baseline sales table.

use mlsim_model::{PreprocessingConfig, Value, baseline_dataset, fields};
use mlsim_transform::{PreprocessingPipeline, StepReport, transform};
use proptest::prelude::*;

fn text_column(dataset: &mlsim_model::Dataset, field: &str) -> Vec<String> {
    dataset
        .column_values(field)
        .map(|value| value.and_then(Value::as_str).unwrap().to_string())
        .collect()
}

fn float_column(dataset: &mlsim_model::Dataset, field: &str) -> Vec<f64> {
    dataset
        .column_values(field)
        .map(|value| value.and_then(Value::as_f64).unwrap())
        .collect()
}

#[test]
fn all_toggles_off_is_identity() {
    let baseline = baseline_dataset();
    assert_eq!(transform(&baseline, &PreprocessingConfig::default()), baseline);
}

#[test]
fn baseline_singleton_categories_become_other() {
    let config = PreprocessingConfig::new().with_reduce_cardinality(true);
    let reduced = transform(&baseline_dataset(), &config);
    assert_eq!(
        text_column(&reduced, fields::PARENT_NAME),
        [
            "Electronics",
            "Groceries",
            "Apparel",
            "Home Goods",
            "Electronics",
            "Groceries",
            "Other",
            "Electronics",
            "Apparel",
            "Other",
            "Other",
            "Home Goods",
        ]
    );
}

#[test]
fn baseline_location_expands_to_five_indicators() {
    let config = PreprocessingConfig::new().with_one_hot_encode(true);
    let output = PreprocessingPipeline::from_config(&config).execute(&baseline_dataset());

    let StepReport::OneHotEncoding { indicators } = &output.report.steps[0] else {
        panic!("expected one-hot report");
    };
    assert_eq!(
        indicators,
        &[
            "location_New_York",
            "location_Chicago",
            "location_San_Francisco",
            "location_Miami",
            "location_Boston",
        ]
    );
    for record in output.dataset.iter() {
        assert!(!record.contains(fields::LOCATION));
        let hot: i64 = indicators
            .iter()
            .map(|name| match record.get(name) {
                Some(Value::Int(flag)) => *flag,
                other => panic!("indicator {name} is {other:?}"),
            })
            .sum();
        assert_eq!(hot, 1);
    }
    assert_eq!(
        output.dataset.records()[2].get("location_San_Francisco"),
        Some(&Value::Int(1))
    );
}

#[test]
fn standardized_columns_have_zero_mean_unit_std() {
    let config = PreprocessingConfig::new().with_standardize(true);
    let scaled = transform(&baseline_dataset(), &config);
    for field in fields::NUMERIC_FIELDS {
        let values = float_column(&scaled, field);
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert!(mean.abs() < 1e-9, "{field} mean {mean}");
        assert!((std - 1.0).abs() < 1e-9, "{field} std {std}");
    }
    // Untouched numeric fields keep their raw values.
    assert_eq!(
        scaled.records()[0].get(fields::GROSS_PROFIT),
        Some(&Value::Float(79.50))
    );
}

#[test]
fn baseline_is_never_modified() {
    let baseline = baseline_dataset();
    let _ = transform(&baseline, &PreprocessingConfig::all_steps());
    assert_eq!(baseline, baseline_dataset());
}

proptest! {
    #[test]
    fn any_config_preserves_record_order(
        reduce in any::<bool>(),
        one_hot in any::<bool>(),
        standardize in any::<bool>(),
    ) {
        let config = PreprocessingConfig::new()
            .with_reduce_cardinality(reduce)
            .with_one_hot_encode(one_hot)
            .with_standardize(standardize);
        let transformed = transform(&baseline_dataset(), &config);
        let ids: Vec<_> = transformed.column_values(fields::ID).map(|value| value.cloned()).collect();
        let expected: Vec<_> = (1..=12).map(|id| Some(Value::Int(id))).collect();
        prop_assert_eq!(ids, expected);

        let width = transformed.first().map_or(0, mlsim_model::Record::len);
        prop_assert!(transformed.iter().all(|record| record.len() == width));
        prop_assert_eq!(width, if one_hot { 11 } else { 7 });
    }
}

proptest! {
    #[test]
    fn standardized_moments_hold_for_any_column(
        costs in prop::collection::vec(-1_000.0f64..1_000.0, 2..40),
    ) {
        let spread = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            - costs.iter().copied().fold(f64::INFINITY, f64::min);
        prop_assume!(spread > 1.0);

        let dataset: mlsim_model::Dataset = costs
            .iter()
            .map(|cost| mlsim_model::Record::new().with(fields::COST, *cost))
            .collect();
        let pipeline = {
            let mut pipeline = PreprocessingPipeline::new();
            pipeline.add_step(mlsim_transform::preprocess::StandardScaler::new(vec![fields::COST]));
            pipeline
        };
        let scaled = pipeline.execute(&dataset).dataset;
        let values = float_column(&scaled, fields::COST);
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
        prop_assert!(mean.abs() < 1e-9);
        prop_assert!((std - 1.0).abs() < 1e-9);
    }
}
