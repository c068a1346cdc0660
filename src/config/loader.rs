//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Name of the per-user config/state directory.
pub const APP_DIR: &str = "scroll-when-needed";

/// Env var naming an explicit config file.
pub const ENV_CONFIG: &str = "SWN_CONFIG";
/// Env var overriding vertical centering (`true`/`false`/`1`/`0`).
pub const ENV_CENTER: &str = "SWN_CENTER";
/// Env var overriding the initial item count.
pub const ENV_ITEMS: &str = "SWN_ITEMS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// Corresponds to `~/.config/scroll-when-needed/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Stretch short content to fill the container.
    #[serde(default)]
    pub center_content_vertically: Option<bool>,

    /// Number of demo items shown at startup.
    #[serde(default)]
    pub initial_item_count: Option<usize>,

    /// Upper bound of the demo item stepper.
    #[serde(default)]
    pub max_item_count: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Default tracing level when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Stretch short content to fill the container.
    pub center_content_vertically: bool,
    /// Demo items at startup. Never above `max_item_count`.
    pub initial_item_count: usize,
    /// Upper bound of the demo item stepper.
    pub max_item_count: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Default tracing level.
    pub log_level: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            center_content_vertically: true,
            initial_item_count: 10,
            max_item_count: 30,
            log_file_path: default_log_path(),
            log_level: "info".to_string(),
        }
    }
}

impl ResolvedConfig {
    /// Enforce `initial_item_count <= max_item_count`.
    fn clamped(mut self) -> Self {
        self.initial_item_count = self.initial_item_count.min(self.max_item_count);
        self
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/scroll-when-needed/scroll-when-needed.log` on
/// Linux, the platform equivalent elsewhere, or a file in the current
/// directory if no state directory exists.
pub fn default_log_path() -> PathBuf {
    let file = format!("{APP_DIR}.log");
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join(APP_DIR).join(file),
        None => PathBuf::from(file),
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
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

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SWN_CONFIG` environment variable
/// 3. Default path `~/.config/scroll-when-needed/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(ENV_CONFIG) {
        let path = PathBuf::from(&env_path);
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidPath(env_path.to_string_lossy().into_owned()));
        }
        return load_config_file(path);
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        center_content_vertically: config
            .center_content_vertically
            .unwrap_or(defaults.center_content_vertically),
        initial_item_count: config
            .initial_item_count
            .unwrap_or(defaults.initial_item_count),
        max_item_count: config.max_item_count.unwrap_or(defaults.max_item_count),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        log_level: config.log_level.unwrap_or(defaults.log_level),
    }
    .clamped()
}

/// Parse a boolean env value. Accepts `true/false/1/0/yes/no`, any case.
fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `SWN_CENTER` and `SWN_ITEMS`. Unparseable values are ignored
/// with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var(ENV_CENTER) {
        match parse_env_bool(&value) {
            Some(center) => config.center_content_vertically = center,
            None => tracing::warn!(var = ENV_CENTER, value = %value, "Ignoring invalid boolean"),
        }
    }

    if let Ok(value) = std::env::var(ENV_ITEMS) {
        match value.trim().parse::<usize>() {
            Ok(items) => config.initial_item_count = items,
            Err(_) => tracing::warn!(var = ENV_ITEMS, value = %value, "Ignoring invalid item count"),
        }
    }

    config.clamped()
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    center_override: Option<bool>,
    items_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(center) = center_override {
        config.center_content_vertically = center;
    }

    if let Some(items) = items_override {
        config.initial_item_count = items;
    }

    config.clamped()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
