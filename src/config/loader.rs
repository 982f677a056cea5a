//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PHOTON_CONFIG";

/// Environment variable overriding the location file.
pub const STATE_FILE_ENV: &str = "PHOTON_STATE_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/photon/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// File holding the encoded query state between runs.
    #[serde(default)]
    pub state_file: Option<PathBuf>,

    /// `_fields` JSON document describing the dataset.
    #[serde(default)]
    pub fields_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Print the query request after processing input.
    #[serde(default)]
    pub print_query: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Location file.
    pub state_file: PathBuf,
    /// Field metadata document, if any.
    pub fields_file: Option<PathBuf>,
    /// Log file.
    pub log_file_path: PathBuf,
    /// Print the query request.
    pub print_query: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_path(),
            fields_file: None,
            log_file_path: default_log_path(),
            print_query: false,
        }
    }
}

/// Platform state directory for photon, or the current directory.
fn state_dir() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("photon"))
        .unwrap_or_default()
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/photon/photon.log` on Unix-like systems.
/// If the state directory cannot be determined, falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    state_dir().join("photon.log")
}

/// Resolve default location file path (`~/.local/state/photon/fragment`).
pub fn default_state_path() -> PathBuf {
    state_dir().join("fragment")
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/photon/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("photon").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PHOTON_CONFIG` environment variable
/// 3. Default path `~/.config/photon/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides (`PHOTON_STATE_FILE`).
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(STATE_FILE_ENV) {
        config.state_file = PathBuf::from(path);
    }

    config
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        state_file: config.state_file.unwrap_or(defaults.state_file),
        fields_file: config.fields_file.or(defaults.fields_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        print_query: config.print_query.unwrap_or(defaults.print_query),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    state_file_override: Option<PathBuf>,
    fields_file_override: Option<PathBuf>,
    print_query_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(path) = state_file_override {
        config.state_file = path;
    }

    if let Some(path) = fields_file_override {
        config.fields_file = Some(path);
    }

    if let Some(print_query) = print_query_override {
        config.print_query = print_query;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
