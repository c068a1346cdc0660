//! Configuration module.
//!
//! Precedence: defaults → config file → env vars → CLI args.

pub mod keybindings;
mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, APP_DIR, ENV_CENTER, ENV_CONFIG, ENV_ITEMS,
};
