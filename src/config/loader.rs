//! Configuration file loading with precedence handling.

use crate::model::LayoutMode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "MULTIVIEW_CONFIG";
/// Environment variable overriding the initial layout mode.
pub const ENV_LAYOUT: &str = "MULTIVIEW_LAYOUT";
/// Environment variable overriding the page URL shareable links are built on.
pub const ENV_PAGE_URL: &str = "MULTIVIEW_PAGE_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path:?}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path:?}: {reason}")]
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
/// Corresponds to `~/.config/multiview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial layout mode ("grid", "focus", "horizontal", "vertical").
    #[serde(default)]
    pub layout: Option<LayoutMode>,

    /// Page URL that shareable links are built on and restored from.
    #[serde(default)]
    pub page_url: Option<String>,

    /// Host passed to Twitch embeds as `parent`.
    #[serde(default)]
    pub embed_parent: Option<String>,

    /// Live hint for YouTube URLs added without an explicit flag.
    #[serde(default)]
    pub default_live: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial layout mode.
    pub layout: LayoutMode,
    /// Page URL for shareable links.
    pub page_url: String,
    /// Twitch embed parent host.
    pub embed_parent: String,
    /// Live hint for YouTube URLs.
    pub default_live: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Grid,
            page_url: "http://localhost:3000/".to_string(),
            embed_parent: "localhost".to_string(),
            default_live: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/multiview/multiview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("multiview").join("multiview.log")
    } else {
        PathBuf::from("multiview.log")
    }
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
/// Returns `~/.config/multiview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("multiview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MULTIVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/multiview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        layout: config.layout.unwrap_or(defaults.layout),
        page_url: config.page_url.unwrap_or(defaults.page_url),
        embed_parent: config.embed_parent.unwrap_or(defaults.embed_parent),
        default_live: config.default_live.unwrap_or(defaults.default_live),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MULTIVIEW_LAYOUT`: Override layout (unrecognized names are ignored)
/// - `MULTIVIEW_PAGE_URL`: Override page URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(layout) = std::env::var(ENV_LAYOUT)
        .ok()
        .and_then(|raw| raw.parse::<LayoutMode>().ok())
    {
        config.layout = layout;
    }

    if let Ok(page_url) = std::env::var(ENV_PAGE_URL) {
        config.page_url = page_url;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    layout_override: Option<LayoutMode>,
    page_url_override: Option<String>,
    live_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(layout) = layout_override {
        config.layout = layout;
    }

    if let Some(page_url) = page_url_override {
        config.page_url = page_url;
    }

    if let Some(live) = live_override {
        config.default_live = live;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
