//! Preprocessing engine and view projection.
//!
//! - **preprocess**: the individual steps (cardinality reduction, one-hot
//!   encoding, standardization)
//! - **pipeline**: assembles enabled steps in their fixed order and runs them
//! - **projection**: task-dependent headers, row projection and the
//!   train/test split index
//! - **frame**: Polars `DataFrame` export of a projected view

pub mod frame;
pub mod pipeline;
pub mod preprocess;
pub mod projection;

pub use frame::SPLIT_COLUMN;
pub use pipeline::{PipelineOutput, PipelineReport, PreprocessingPipeline, transform};
pub use preprocess::{PreprocessStep, StepKind, StepReport};
pub use projection::{
    Partition, ProjectedView, Row, compute_split_index, hidden_fields, project, project_headers,
    project_rows,
};
