//! Error handling for the SeqPrep CLI

use seqprep_core::SeqPrepError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for SeqPrep CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Input unavailable: {message}")]
    InputUnavailable { message: String },

    #[error("Sequence too short: {observed} bases available, {required} required for {num_files} files of the requested length")]
    InsufficientLength {
        observed: usize,
        required: usize,
        num_files: usize,
    },

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("Model error: {message}")]
    Model { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn model<S: Into<String>>(message: S) -> Self {
        Self::Model { message: message.into() }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }
}

impl From<SeqPrepError> for CliError {
    fn from(err: SeqPrepError) -> Self {
        match &err {
            SeqPrepError::InputUnavailable { source_name, source }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::file_not_found(PathBuf::from(source_name))
            }
            SeqPrepError::InputUnavailable { .. } => Self::InputUnavailable {
                message: err.to_string(),
            },
            SeqPrepError::Length {
                observed,
                required,
                num_files,
            } => Self::InsufficientLength {
                observed: *observed,
                required: *required,
                num_files: *num_files,
            },
            SeqPrepError::Output { .. } => Self::Output {
                message: err.to_string(),
            },
            SeqPrepError::ModelShape { .. } | SeqPrepError::ModelFormat(_) => {
                Self::model(err.to_string())
            }
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file\n\
                 • Use '-' to read FASTA from standard input",
                path.display()
            ));
        }

        CliError::InsufficientLength { observed, num_files, .. } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Lower --num-files or --chunk-length\n\
                 • Omit --num-files to create as many full chunks as fit\n\
                 • Run 'seqprep stats' to see how many chunks {} bases can yield (requested {})",
                observed, num_files
            ));
        }

        CliError::Model { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check that the model file is a JSON object with \"weights\" and \"bias\"\n\
                 • Ensure the number of weights matches --target-length"
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your seqprep.toml configuration file\n\
                 • Use 'seqprep config --example' to generate a sample configuration\n\
                 • Verify that all lengths are positive integers"
            );
        }

        CliError::Output { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Ensure you have write permissions for the output directory\n\
                 • Check available disk space"
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
