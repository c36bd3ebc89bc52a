//! Error types for engine operations

use thiserror::Error;

/// Result type for engine operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during engine operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// The operation targeted a document id that does not exist
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// The document failed validation before indexing
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Conversion from validator::ValidationErrors
impl From<validator::ValidationErrors> for SearchError {
    fn from(err: validator::ValidationErrors) -> Self {
        SearchError::InvalidDocument(err.to_string())
    }
}
