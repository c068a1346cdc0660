//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_app_dir_and_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains(APP_DIR) && path_str.ends_with("config.toml"),
            "got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_app_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("scroll-when-needed.log"),
        "got: {:?}",
        path
    );
}

#[test]
fn resolved_config_defaults() {
    let config = ResolvedConfig::default();
    assert!(config.center_content_vertically);
    assert_eq!(config.initial_item_count, 10);
    assert_eq!(config.max_item_count, 30);
    assert_eq!(config.log_level, "info");
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "swn_test_config.toml",
        r#"
center_content_vertically = false
initial_item_count = 4
max_item_count = 12
log_level = "debug"
"#,
    );

    let config = load_config_file(&path)
        .expect("Should parse valid TOML")
        .expect("File exists");

    assert_eq!(config.center_content_vertically, Some(false));
    assert_eq!(config.initial_item_count, Some(4));
    assert_eq!(config.max_item_count, Some(12));
    assert_eq!(config.log_level, Some("debug".to_string()));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp_config("swn_test_invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&path) {
        Err(ConfigError::ParseError { path: p, reason: _ }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("swn_test_unknown.toml", "horizontal_scrolling = true\n");

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::ParseError { .. })
    ));

    fs::remove_file(path).ok();
}

#[test]
fn merge_config_without_file_uses_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_file_values_override_defaults() {
    let file = ConfigFile {
        center_content_vertically: Some(false),
        initial_item_count: Some(3),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));
    assert!(!resolved.center_content_vertically);
    assert_eq!(resolved.initial_item_count, 3);
    assert_eq!(resolved.max_item_count, 30);
}

#[test]
fn merge_config_clamps_initial_items_to_max() {
    let file = ConfigFile {
        initial_item_count: Some(50),
        max_item_count: Some(20),
        ..ConfigFile::default()
    };

    assert_eq!(merge_config(Some(file)).initial_item_count, 20);
}

#[test]
#[serial(env)]
fn load_config_with_precedence_prefers_explicit_path() {
    let explicit = write_temp_config("swn_test_explicit.toml", "initial_item_count = 7\n");
    let from_env = write_temp_config("swn_test_env.toml", "initial_item_count = 9\n");
    env::set_var(ENV_CONFIG, &from_env);

    let loaded = load_config_with_precedence(Some(explicit.clone()));
    env::remove_var(ENV_CONFIG);

    assert_eq!(
        loaded.expect("valid").and_then(|c| c.initial_item_count),
        Some(7)
    );

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(env)]
fn load_config_with_precedence_falls_back_to_env_path() {
    let from_env = write_temp_config("swn_test_env_only.toml", "max_item_count = 5\n");
    env::set_var(ENV_CONFIG, &from_env);

    let loaded = load_config_with_precedence(None);
    env::remove_var(ENV_CONFIG);

    assert_eq!(loaded.expect("valid").and_then(|c| c.max_item_count), Some(5));

    fs::remove_file(from_env).ok();
}

#[test]
#[serial(env)]
fn env_overrides_apply_center_and_items() {
    env::set_var(ENV_CENTER, "no");
    env::set_var(ENV_ITEMS, "25");

    let config = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_CENTER);
    env::remove_var(ENV_ITEMS);

    assert!(!config.center_content_vertically);
    assert_eq!(config.initial_item_count, 25);
}

#[test]
#[serial(env)]
fn env_overrides_ignore_invalid_values() {
    env::set_var(ENV_CENTER, "sideways");
    env::set_var(ENV_ITEMS, "-4");

    let config = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_CENTER);
    env::remove_var(ENV_ITEMS);

    assert_eq!(config, ResolvedConfig::default());
}

#[test]
fn cli_overrides_win_and_are_clamped() {
    let config = apply_cli_overrides(ResolvedConfig::default(), Some(false), Some(99));
    assert!(!config.center_content_vertically);
    assert_eq!(config.initial_item_count, 30);
}

#[test]
fn cli_overrides_absent_leave_config_untouched() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
fn parse_env_bool_accepts_common_spellings() {
    assert_eq!(parse_env_bool("TRUE"), Some(true));
    assert_eq!(parse_env_bool(" 0 "), Some(false));
    assert_eq!(parse_env_bool("maybe"), None);
}
