use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChiError {
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Partition {partition} has no instances")]
    EmptyPartition { partition: usize },

    #[error("Partition {partition} is inconsistent with the shared fuzzy domain: {reason}")]
    InconsistentDomain { partition: usize, reason: String },

    #[error("Output of partition {partition} is missing")]
    MissingPartition { partition: usize },

    #[error("No partition outputs to merge")]
    NoPartitions,

    #[error("Invalid instance {row} in partition {partition}: {reason}")]
    InvalidInstance {
        partition: usize,
        row: usize,
        reason: String,
    },

    #[error("DataFrame error: {0}")]
    DataFrame(String),

    #[error("Codec error: {0}")]
    Codec(String),
}

pub type Result<T> = std::result::Result<T, ChiError>;

impl From<polars::error::PolarsError> for ChiError {
    fn from(err: polars::error::PolarsError) -> Self {
        ChiError::DataFrame(err.to_string())
    }
}

impl From<bincode::Error> for ChiError {
    fn from(err: bincode::Error) -> Self {
        ChiError::Codec(err.to_string())
    }
}
