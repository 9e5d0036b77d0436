use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown dataset label: `{0}`")]
    UnknownDataset(String),

    #[error("duplicate dataset label: `{0}`")]
    DuplicateDataset(String),
}
