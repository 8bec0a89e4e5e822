use std::path::PathBuf;

use thiserror::Error;

use film_catalog_core::{CatalogError, FilmError, ValidationError};

/// A script line that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Missing film type after ADD command")]
    MissingKind,

    #[error("Missing title for ADD command. Format: ADD type title|additional_data")]
    MissingTitle,

    #[error("Missing condition for REM command")]
    MissingCondition,
}

/// A creation request that did not produce a film.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Error creating film: {0}")]
    Film(#[from] FilmError),
}

/// Why a single script line failed. The run continues after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors that end a script run early.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Cannot open file '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading script: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
