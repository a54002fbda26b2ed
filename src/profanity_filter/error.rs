// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error types for the profanity filter

use std::path::PathBuf;

/// Errors raised while building or querying a profanity filter
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Malformed caller input (empty dictionary word, bad censor character, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Word source path could not be read
    #[error("word list not found: {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Query issued before any word source was loaded
    #[error("no word list loaded; call load() before querying")]
    InvalidState,

    /// Automaton construction failed (pattern set too large)
    #[error("failed to compile profanity index: {0}")]
    Build(#[from] aho_corasick::BuildError),

    /// Invalid JSON configuration or character table
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type using FilterError
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(feature = "python")]
impl From<FilterError> for pyo3::PyErr {
    fn from(err: FilterError) -> Self {
        use pyo3::exceptions::{PyFileNotFoundError, PyRuntimeError, PyValueError};

        match err {
            FilterError::InvalidArgument(_) | FilterError::Config(_) => {
                PyValueError::new_err(err.to_string())
            }
            FilterError::FileNotFound { .. } => PyFileNotFoundError::new_err(err.to_string()),
            FilterError::InvalidState | FilterError::Build(_) => {
                PyRuntimeError::new_err(err.to_string())
            }
        }
    }
}
