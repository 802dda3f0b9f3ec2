//! Error types for the section splitter.
//!
//! Every filesystem failure carries the path it happened on, so the
//! binary can print a useful diagnostic without extra context.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the section splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The input report could not be read.
    #[error("Failed to read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A section file could not be written.
    #[error("Failed to write section file {}: {source}", .path.display())]
    WriteSection {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The working directory is needed to resolve a relative input path.
    #[error("Failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
