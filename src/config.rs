//! Plugin configuration.
//!
//! [`Settings`] is the resolved, validated record every invocation reads.
//! [`SettingsUpdate`] is the wire shape: the `setup()` argument and the
//! user configuration file share it, all fields optional so absent fields
//! keep their current value.
//!
//! User config location: $XDG_CONFIG_HOME/bufcalc/bufcalc.toml
//! Fallback: the platform config directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::error::CalcError;
use crate::format::FloatFormat;
use crate::logger::LogLevel;

/// Resolved process-wide configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub float_format: FloatFormat,
    pub log_level: LogLevel,
    /// Opt-in: treat commas between digits as grouping separators and drop
    /// them before evaluation.
    pub comma_separators: bool,
    /// Optional append-only diagnostic log file.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            float_format: FloatFormat::default(),
            log_level: LogLevel::Fatal,
            comma_separators: false,
            log_file: None,
        }
    }
}

impl Settings {
    /// Apply an update field by field.
    ///
    /// Invalid values are returned as errors and leave the corresponding
    /// field untouched; valid fields apply regardless of other fields
    /// failing.
    pub fn apply(&mut self, update: &SettingsUpdate) -> Vec<CalcError> {
        let mut rejected = Vec::new();
        if let Some(spec) = &update.float_format {
            match spec.parse::<FloatFormat>() {
                Ok(format) => self.float_format = format,
                Err(err) => rejected.push(err),
            }
        }
        if let Some(name) = &update.log_level {
            match name.parse::<LogLevel>() {
                Ok(level) => self.log_level = level,
                Err(err) => rejected.push(err),
            }
        }
        if let Some(flag) = update.comma_separators {
            self.comma_separators = flag;
        }
        if let Some(path) = &update.log_file {
            self.log_file = Some(path.clone());
        }
        rejected
    }
}

/// A partial configuration, as supplied by `setup()` or the user config
/// file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub float_format: Option<String>,
    pub log_level: Option<String>,
    pub comma_separators: Option<bool>,
    pub log_file: Option<PathBuf>,
}

/// Error cases for user configuration loading
#[derive(Debug, Error)]
pub enum UserConfigError {
    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML for a [`SettingsUpdate`]
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result type for user configuration loading
pub type UserConfigResult<T> = Result<T, UserConfigError>;

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/bufcalc/bufcalc.toml
/// 2. Otherwise: the platform config directory, e.g. ~/.config/bufcalc/bufcalc.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("bufcalc").join("bufcalc.toml"));
    }
    dirs::config_dir().map(|dir| dir.join("bufcalc").join("bufcalc.toml"))
}

/// Load the user configuration file, if one exists.
pub fn load_user_config() -> UserConfigResult<Option<SettingsUpdate>> {
    match user_config_path() {
        Some(path) => load_user_config_from(&path),
        None => Ok(None),
    }
}

/// Load a configuration file from an explicit path. A missing file is not
/// an error.
pub fn load_user_config_from(path: &Path) -> UserConfigResult<Option<SettingsUpdate>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(UserConfigError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };
    let update = toml::from_str(&contents).map_err(|source| UserConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(update))
}
