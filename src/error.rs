//! Error handling for gitignore template resolution.
//!
//! This module defines the main error type `Error` used throughout the
//! library, along with a convenient `Result` type alias. Every failure is
//! surfaced to the immediate caller; nothing is retried or swallowed
//! internally.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for gitignore template operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gitignore template operations
#[derive(Debug, Error)]
pub enum Error {
    /// The template directory could not be listed
    #[error("Failed to list template directory {path}: {source}")]
    Discovery {
        /// The template root that was being scanned
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// A requested template name is not in the catalog
    #[error("Unknown gitignore: {0}. Only names returned from git_ignore_names() can be used.")]
    UnknownTemplate(String),

    /// A catalog-resolved template file could not be read
    #[error("Failed to read template {path}: {source}")]
    Read {
        /// Path of the template file
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// The destination ignore file could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path of the destination file
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// Neither a template name nor explicit text was supplied
    #[error("No gitignore content specified: supply a template name or explicit text")]
    NoContentSpecified,
}

impl Error {
    /// Create a new unknown-template error
    pub fn unknown_template<S: Into<String>>(name: S) -> Self {
        Self::UnknownTemplate(name.into())
    }
}
