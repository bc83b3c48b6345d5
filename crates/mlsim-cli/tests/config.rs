//! Configuration file loading and command-line overrides.

use std::fs;
use std::path::PathBuf;

use insta::assert_json_snapshot;
use mlsim_cli::config::{Overrides, SimulatorConfig, resolve};
use mlsim_model::{PreprocessingConfig, TaskType};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "mlsim-{}-{}-{}.toml",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_values_are_loaded() {
    let path = temp_config(
        "load",
        r#"
task = "classification"

[preprocessing]
reduce_cardinality = true
standardize = true
train_test_split = 80
"#,
    );
    let config = resolve(Some(&path), &Overrides::default()).unwrap();
    fs::remove_file(&path).unwrap();

    assert_json_snapshot!(config, @r#"
    {
      "task": "classification",
      "preprocessing": {
        "reduce_cardinality": true,
        "one_hot_encode": false,
        "standardize": true,
        "train_test_split": 80
      }
    }
    "#);
}

#[test]
fn flags_override_file() {
    let path = temp_config(
        "override",
        "task = \"regression\"\n[preprocessing]\ntrain_test_split = 30\n",
    );
    let overrides = Overrides {
        task: Some(TaskType::Clustering),
        one_hot_encode: true,
        split: Some(60),
        ..Overrides::default()
    };
    let config = resolve(Some(&path), &overrides).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.task, Some(TaskType::Clustering));
    assert_eq!(
        config.preprocessing,
        PreprocessingConfig::new()
            .with_one_hot_encode(true)
            .with_split(60)
    );
}

#[test]
fn no_file_means_defaults() {
    let config = resolve(None, &Overrides::default()).unwrap();
    assert_eq!(config, SimulatorConfig::default());
    assert_eq!(config.preprocessing.train_test_split, 70);
}

#[test]
fn merged_split_is_validated() {
    let error = resolve(
        None,
        &Overrides {
            split: Some(5),
            ..Overrides::default()
        },
    )
    .unwrap_err();
    assert!(format!("{error:#}").contains("between 10% and 90%"));
}

#[test]
fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("mlsim-does-not-exist.toml");
    let error = resolve(Some(&path), &Overrides::default()).unwrap_err();
    assert!(format!("{error:#}").contains("read config file"));
}
