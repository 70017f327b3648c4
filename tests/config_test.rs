//! Configuration loading tests against real files.

mod common;

use common::{fixtures, ConfigFile};
use huebox::error::AppError;
use huebox::models::{AppConfig, StopConfig};
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn test_load_from_path() {
    let file = ConfigFile::new(fixtures::FULL_CONFIG);
    let config = AppConfig::load_from_path(file.path()).unwrap();

    assert_eq!(config.default_gradient, Some("dusk".to_string()));
    assert_eq!(config.default_steps, 5);
    assert_eq!(
        config.gradients.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["dusk", "fade", "wheel"]
    );
    assert_eq!(config.gradients["dusk"].stops[2], StopConfig::Hint { hint: 0.6 });
    assert_eq!(config.gradients["fade"].method, "linear");
}

#[test]
fn test_load_from_missing_path_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = AppConfig::load_from_path(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)), "got {err:?}");
}

#[test]
fn test_load_from_invalid_yaml_is_config_error() {
    let file = ConfigFile::new("gradients: [unclosed");
    let err = AppConfig::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, AppError::Config(_)), "got {err:?}");
}

#[test]
fn test_load_or_default_falls_back() {
    let file = ConfigFile::new("default_steps: not-a-number");
    let config = AppConfig::load_or_default(Some(file.path()));
    assert_eq!(config.default_gradient, Some("sunset".to_string()));
    assert_eq!(config.gradients.len(), 3);

    let config = AppConfig::load_or_default(Some(Path::new("/nonexistent/huebox.yaml")));
    assert_eq!(config.default_steps, 9);
}

#[test]
fn test_load_or_default_reads_file() {
    let file = ConfigFile::new(fixtures::FULL_CONFIG);
    let config = AppConfig::load_or_default(Some(file.path()));
    assert_eq!(config.default_gradient, Some("dusk".to_string()));
}
