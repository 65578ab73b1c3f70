//! Error types for catalog access and parsing.

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type for catalog operations.
///
/// `SourceNotFound` maps to a client-visible 404 at the HTTP boundary,
/// everything else to a 500 carrying the underlying message.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The mission's source file does not exist.
    #[error("catalog source not found: {path}")]
    SourceNotFound { path: String },

    /// The file exists but could not be parsed, or a required column is
    /// missing.
    #[error("malformed catalog source: {message}")]
    Malformed { message: String },
}

impl CatalogError {
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// True when the failure is a missing file rather than bad content.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::malformed(err.to_string())
    }
}
