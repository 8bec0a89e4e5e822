//! Application settings (`~/.config/film-catalog/settings.toml`).
//!
//! ```toml
//! [script]
//! default_path = "/home/me/films.txt"
//! comment_prefix = "#"
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::runner::RunOptions;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub script: ScriptSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScriptSettings {
    /// Script used by `run` when no path is given.
    pub default_path: Option<PathBuf>,
    pub comment_prefix: String,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            default_path: None,
            comment_prefix: "#".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default log level filter (e.g. "info", "debug"). `RUST_LOG` wins.
    pub level: Option<String>,
}

impl Settings {
    /// Load from the canonical settings path.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    /// Load from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            comment_prefix: self.script.comment_prefix.clone(),
        }
    }
}

/// Canonical path to the settings file: `~/.config/film-catalog/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("film-catalog").join("settings.toml")
}

/// Resolve the script path using a priority chain:
///
/// 1. CLI argument (if `Some`)
/// 2. `script.default_path` in settings
///
/// Returns `None` when neither is set; the caller decides whether to prompt.
pub fn resolve_script_path(cli_arg: Option<PathBuf>, settings: &Settings) -> Option<PathBuf> {
    cli_arg.or_else(|| settings.script.default_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.script.comment_prefix, "#");
        assert!(settings.script.default_path.is_none());
        assert!(settings.log.level.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("[log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(settings.log.level.as_deref(), Some("debug"));
        assert_eq!(settings.script.comment_prefix, "#");
    }

    #[test]
    fn cli_argument_wins() {
        let mut settings = Settings::default();
        settings.script.default_path = Some(PathBuf::from("from-settings.txt"));
        assert_eq!(
            resolve_script_path(Some(PathBuf::from("cli.txt")), &settings),
            Some(PathBuf::from("cli.txt"))
        );
        assert_eq!(
            resolve_script_path(None, &settings),
            Some(PathBuf::from("from-settings.txt"))
        );
        assert_eq!(resolve_script_path(None, &Settings::default()), None);
    }
}
