//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use quadvec::config::{AppConfig, ConfigError};
use quadvec::Vec4;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("QV_DISPLAY__FORMAT", "F3");
    let config = AppConfig::load();
    std::env::remove_var("QV_DISPLAY__FORMAT");

    let config = config.unwrap();
    assert_eq!(config.display.format, "F3");
    let v = Vec4::from(config.showcase.vectors[0]);
    assert_eq!(
        v.to_string_with(&config.display.format).unwrap(),
        "(1.000, -2.500, 0.300, 4.000)"
    );
}

#[test]
#[serial]
fn test_env_override_is_validated() {
    for token in ["Z1", "F70000"] {
        std::env::set_var("QV_DISPLAY__FORMAT", token);
        let result = AppConfig::load();
        std::env::remove_var("QV_DISPLAY__FORMAT");

        assert!(matches!(result, Err(ConfigError::Invalid(_))), "{} accepted", token);
    }
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("QV_DISPLAY__FORMAT");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.showcase.modulus, 7.0);
    assert_eq!(config.showcase.int_vectors[0], [10, -20, 30, -40]);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.debug.log_level, "info");
    assert_eq!(config.showcase.vectors.len(), 2);
}
