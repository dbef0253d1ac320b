//! Error types for dataset loading.

use atlas_common::AtlasError;
use thiserror::Error;

/// Errors that can occur while loading or refreshing a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("Invalid dataset: {0}")]
    Invalid(String),
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

impl From<DatasetError> for AtlasError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::FileRead(e) => AtlasError::DatasetRead(e.to_string()),
            DatasetError::Parse(e) => AtlasError::DatasetParse(e.to_string()),
            DatasetError::Download(e) => AtlasError::UpstreamRequest(e.to_string()),
            DatasetError::Invalid(msg) => AtlasError::DatasetParse(msg),
        }
    }
}
