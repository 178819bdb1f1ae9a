use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for nginx-auto-config operations.
///
/// Every variant is fatal: input mistakes are handled by re-prompting and
/// never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The output directory does not accept new files.
    #[error("Write permission denied in '{}', please go to a workable dir", .0.display())]
    WritePermissionDenied(PathBuf),

    /// Writing the generated configuration failed.
    #[error("Failed to write '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A persisted answers file could not be read or decoded.
    #[error("Failed to load answers from '{}': {details}", path.display())]
    AnswersFile { path: PathBuf, details: String },

    /// Decoded answers violate the model invariants.
    #[error("Invalid answers: {0}")]
    InvalidAnswers(String),

    /// Standard input ended (or was interrupted) while a question was pending.
    #[error("Input closed before all questions were answered")]
    InputClosed,

    /// The interactive prompt backend failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn invalid_answers<S: Into<String>>(message: S) -> Self {
        AppError::InvalidAnswers(message.into())
    }

    pub(crate) fn answers_file<S: Into<String>>(path: impl Into<PathBuf>, details: S) -> Self {
        AppError::AnswersFile { path: path.into(), details: details.into() }
    }
}
