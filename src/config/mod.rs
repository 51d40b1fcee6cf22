//! Configuration module.
//!
//! Settings come from, lowest to highest precedence: built-in defaults, an
//! optional TOML file, `MULTIVIEW_*` environment variables, and CLI flags.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};
