use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid input spec '{0}' (expected FILE:YEAR[:ENCODING])")]
    InvalidInputSpec(String),
    #[error("row '{label}' has {found} values, table has {expected} value columns")]
    RowShape {
        label: String,
        expected: usize,
        found: usize,
    },
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
