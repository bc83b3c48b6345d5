//! Data model for the ML workflow simulator.
//!
//! - **value**: cell values ([`Value`])
//! - **dataset**: ordered field mappings ([`Record`]) and row sequences ([`Dataset`])
//! - **fields**: canonical field names of the sales table
//! - **baseline**: the fixed 12-record table every run starts from
//! - **task**: business problem selection ([`TaskType`])
//! - **options**: preprocessing configuration ([`PreprocessingConfig`])

pub mod baseline;
pub mod dataset;
pub mod error;
pub mod fields;
pub mod options;
pub mod task;
pub mod value;

pub use baseline::baseline_dataset;
pub use dataset::{Dataset, Record};
pub use error::{ModelError, Result};
pub use options::{
    DEFAULT_SPLIT_PERCENT, MAX_SPLIT_PERCENT, MIN_SPLIT_PERCENT, PreprocessingConfig,
};
pub use task::TaskType;
pub use value::Value;
