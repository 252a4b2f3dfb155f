//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use pfield::config::{AppConfig, MotionKind};
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("PF_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("PF_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_overrides_field_section() {
    std::env::set_var("PF_FIELD__PARTICLE_COUNT", "150");
    std::env::set_var("PF_FIELD__MOTION", "time_scaled");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("PF_FIELD__PARTICLE_COUNT");
    std::env::remove_var("PF_FIELD__MOTION");

    assert_eq!(config.field.particle_count, 150);
    assert_eq!(config.field.motion, MotionKind::TimeScaled);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("PF_WINDOW__TITLE");

    let from_file = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();
    let builtin = AppConfig::default();

    assert_eq!(from_file.window.width, builtin.window.width);
    assert_eq!(from_file.field.particle_count, builtin.field.particle_count);
    assert_eq!(from_file.field.link_distance, builtin.field.link_distance);
    assert_eq!(from_file.field.motion, builtin.field.motion);
    assert_eq!(from_file.debug.headless_frames, 0);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, "Particle Field");
    assert_eq!(config.field.particle_count, 80);
}

#[test]
#[serial]
fn test_invalid_env_value_is_an_error() {
    std::env::set_var("PF_FIELD__PARTICLE_COUNT", "lots");
    let result = AppConfig::load_from("does/not/exist");
    std::env::remove_var("PF_FIELD__PARTICLE_COUNT");

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
