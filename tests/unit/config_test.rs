//! Tests for configuration validation

use cooperative_scheduler::config::{DemoConfig, SchedulerConfig};

#[test]
fn test_scheduler_config_default_is_valid() {
    let cfg = SchedulerConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.max_steps_per_run, None);
    assert!(!cfg.trace_steps);
}

#[test]
fn test_scheduler_config_zero_budget() {
    let cfg = SchedulerConfig {
        max_steps_per_run: Some(0),
        trace_steps: false,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_scheduler_config_from_json() {
    let cfg = SchedulerConfig::from_json_str(r#"{ "max_steps_per_run": 50 }"#).unwrap();
    assert_eq!(cfg.max_steps_per_run, Some(50));
    assert!(!cfg.trace_steps);
}

#[test]
fn test_scheduler_config_from_bad_json() {
    let err = SchedulerConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_demo_config_defaults() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.range_start, 1500);
    assert_eq!(cfg.range_end, 1600);
    assert_eq!(cfg.message, "Working ...");
    assert_eq!(cfg.interval_ms, 250);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_demo_config_empty_range() {
    let cfg = DemoConfig {
        range_start: 10,
        range_end: 10,
        ..DemoConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_demo_config_nested_scheduler_invalid() {
    let json = r#"{
        "range_start": 2,
        "range_end": 20,
        "scheduler": { "max_steps_per_run": 0 }
    }"#;
    let err = DemoConfig::from_json_str(json).unwrap_err();
    assert!(err.contains("scheduler invalid"));
}

#[test]
fn test_demo_config_partial_json_keeps_defaults() {
    let cfg = DemoConfig::from_json_str(r#"{ "message": "Searching" }"#).unwrap();
    assert_eq!(cfg.message, "Searching");
    assert_eq!(cfg.range_start, 1500);
    assert_eq!(cfg.interval_ms, 250);
}
