use thiserror::Error;

use film_catalog_lib::{ConditionError, RunError, SettingsError};

/// Errors that end a CLI command with a non-zero exit code.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be read
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// Script could not be read
    #[error("{0}")]
    Run(#[from] RunError),

    /// Condition given to `check` is not valid
    #[error("{0}")]
    Condition(#[from] ConditionError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),

    /// No script path from arguments, settings, or the prompt
    #[error("Filename cannot be empty")]
    EmptyFilename,
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
