//! Extraction error types.

use thiserror::Error;

use crate::schema::Feature;

/// Why a sample could not be turned into a feature vector.
///
/// These never escape the extractor as `Err`; they are carried inside
/// [`ExtractionResult::Failed`](crate::features::ExtractionResult::Failed).
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PE parse error: {0}")]
    Pe(#[from] goblin::error::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing optional header")]
    MissingOptionalHeader,

    #[error("data directory {index} out of range ({available} present)")]
    DirectoryOutOfRange { index: usize, available: usize },

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("field is not a number: {0}")]
    NotANumber(String),

    #[error("non-finite value for {0}")]
    NonFinite(Feature),
}
