//! Error types for SeqPrep core operations

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqPrepError {
    /// A sequence source or model artifact could not be opened or read.
    #[error("Input unavailable: {source_name}: {source}")]
    InputUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The source sequence is too short for the requested chunk layout.
    #[error(
        "The total sequence length ({observed}) is less than the required {required} bases to create {num_files} files"
    )]
    Length {
        observed: usize,
        required: usize,
        num_files: usize,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model expects {expected} input features, got {actual}")]
    ModelShape { expected: usize, actual: usize },

    #[error("Invalid model artifact: {0}")]
    ModelFormat(String),
}

impl SeqPrepError {
    pub fn input_unavailable<S: Into<String>>(source_name: S, source: std::io::Error) -> Self {
        Self::InputUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    pub fn output<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeqPrepError>;
