//! Error types for manifest-bump.
//!
//! All operations return `Result<T>` which aliases `Result<T, BumpError>`.

use crate::verify::Rejection;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from validation and manifest persistence.
///
/// A declaration missing from the manifest is not an error; it is reported
/// through [`crate::rewrite::Outcome::NotFound`].
#[derive(Debug, Error)]
pub enum BumpError {
    /// Neither a checksum nor a tag was supplied.
    #[error("At least one of --checksum or --tag arguments must be provided.")]
    NothingToDo,

    /// Checksum rejected by a validation rule.
    #[error("Invalid checksum '{0}': {1}")]
    InvalidChecksum(String, Rejection),

    /// Tag rejected by a validation rule.
    #[error("Invalid tag '{0}': {1}")]
    InvalidTag(String, Rejection),

    /// Manifest could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for manifest-bump operations.
pub type Result<T> = std::result::Result<T, BumpError>;
