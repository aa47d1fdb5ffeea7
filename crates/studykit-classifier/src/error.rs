//! Classifier artifact error types.
//!
//! These errors only ever surface at load time; prediction itself is
//! infallible and degrades internally.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading classifier artifacts.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// An artifact file could not be read.
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact file is not valid JSON of the expected shape.
    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The vectorizer and model artifacts disagree about dimensions.
    #[error("artifact shape mismatch: {0}")]
    Shape(String),
}
