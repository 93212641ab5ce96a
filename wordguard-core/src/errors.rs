//! errors.rs - Custom error types for the wordguard-core library.
//!
//! Matching itself never fails; these errors cover building a filter and
//! loading its configuration.
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by `wordguard-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking callers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    #[error("max_repeat must be at least 1, got {0}")]
    InvalidMaxRepeat(usize),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
