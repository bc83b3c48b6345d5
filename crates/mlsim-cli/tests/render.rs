//! JSON and CSV export of projected views.

use mlsim_cli::render::{write_csv, write_json};
use mlsim_model::{PreprocessingConfig, TaskType, baseline_dataset};
use mlsim_transform::{project, transform};

fn regression_view() -> mlsim_transform::ProjectedView {
    let config = PreprocessingConfig::new().with_reduce_cardinality(true);
    let transformed = transform(&baseline_dataset(), &config);
    project(&transformed, Some(TaskType::Regression), 50)
}

#[test]
fn csv_has_header_and_split_column() {
    let mut buffer = Vec::new();
    write_csv(&regression_view(), &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 13);
    assert_eq!(
        lines[0],
        "id,location,parent_name,cost,units_sold,gross_profit,split"
    );
    assert!(lines[1].starts_with("1,New York,Electronics,"));
    assert!(lines[6].ends_with(",train"));
    assert!(lines[7].starts_with("7,Boston,Other,"));
    assert!(lines[7].ends_with(",test"));
}

#[test]
fn json_carries_headers_rows_and_split_index() {
    let mut buffer = Vec::new();
    write_json(&regression_view(), &mut buffer).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(json["split_index"], 6);
    assert_eq!(json["headers"].as_array().unwrap().len(), 6);
    assert_eq!(json["rows"][0][1], "New York");
    assert_eq!(json["rows"][6][2], "Other");
}
