use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("train/test split must be between {min}% and {max}%, got {value}%")]
    SplitRatioOutOfRange { value: u8, min: u8, max: u8 },
    #[error("unknown task type: {0}")]
    UnknownTask(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
