//! Tests for configuration loading, saving and validation

use hand_pointer::{
    config::{Config, EXAMPLE_CONFIG},
    filters::FilterKind,
    gesture::ScrollMode,
    pipeline::HandPipeline,
    Error,
};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hand_pointer_{}_{name}", std::process::id()))
}

#[test]
fn test_round_trip_through_file() {
    let mut config = Config::default();
    config.filter.default_filter = "dexp".to_string();
    config.filter.double_exponential_alpha = 0.7;
    config.gesture.scroll_mode = ScrollMode::Continuous;
    config.mapper.gain = 2.5;

    let path = temp_path("round_trip.yaml");
    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
    assert_eq!(
        loaded.filter_kind().unwrap(),
        FilterKind::DoubleExponentialSmoothing(0.7, 0.5)
    );
}

#[test]
fn test_missing_file() {
    let result = Config::from_file(temp_path("does_not_exist.yaml"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_malformed_yaml() {
    let result = Config::from_yaml("filter: [not, a, map]");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_example_config_is_valid() {
    let config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
    assert!(config.validate().is_ok());
    assert!(HandPipeline::from_config(&config).is_ok());
}

#[test]
fn test_invalid_config_rejected_before_processing() {
    let config = Config::from_yaml("filter:\n  default_filter: sma\n  window: 0\n").unwrap();
    assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    assert!(HandPipeline::from_config(&config).is_err());

    let config = Config::from_yaml("gesture:\n  scroll_amount: 0\n").unwrap();
    assert!(HandPipeline::from_config(&config).is_err());
}

#[test]
fn test_scroll_mode_names() {
    let config = Config::from_yaml("gesture:\n  scroll_mode: continuous\n").unwrap();
    assert_eq!(config.gesture.scroll_mode, ScrollMode::Continuous);
    assert!(Config::from_yaml("gesture:\n  scroll_mode: sometimes\n").is_err());
}
