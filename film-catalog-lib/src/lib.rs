//! Script translation layer for the film catalog: command parsing, record
//! construction from text, script execution, and shared settings.

pub mod error;
pub mod factory;
pub mod runner;
pub mod script;
pub mod settings;

pub use error::{FactoryError, LineError, RunError, ScriptError, SettingsError};
pub use factory::{build_film, creation_params};
pub use runner::{RunOptions, RunSummary, ScriptEvent, execute, run_script, run_script_file};
pub use script::{AddRequest, Command, parse_line};
pub use settings::{Settings, resolve_script_path, settings_path};

// Re-export core types so frontends only need this crate.
pub use film_catalog_core::{
    AnimationType, Catalog, Condition, ConditionError, Field, Film, FilmKind, FilmRecord, Operator,
    RemovalReport,
};
