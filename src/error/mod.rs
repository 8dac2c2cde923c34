//! Error handling for `PillMatch`.

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for `PillMatch`
#[derive(Debug, thiserror::Error)]
pub enum PillMatchError {
    /// One or more input values are missing or outside the accepted range
    #[error("Please correct the following errors:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// Weight or height was not strictly positive when computing BMI
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// Catalog data does not have the expected shape
    #[error("Catalog format error: {0}")]
    CatalogFormat(String),

    /// An admin edit was rejected
    #[error("Catalog edit rejected: {0}")]
    Admin(String),

    /// Error opening, reading or writing a catalog file
    #[error("IO error for {}: {source}", path.display())]
    Io {
        /// The file the operation was working on
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },
}

impl PillMatchError {
    /// Create a catalog format error
    pub fn catalog_format(message: impl Into<String>) -> Self {
        Self::CatalogFormat(message.into())
    }

    /// Create an admin error
    pub fn admin(message: impl Into<String>) -> Self {
        Self::Admin(message.into())
    }

    /// Wrap an IO error with the path it occurred on
    pub fn io_error(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The individual validation messages, if this is a validation error
    #[must_use]
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}

/// Result type for `PillMatch` operations
pub type Result<T> = std::result::Result<T, PillMatchError>;
