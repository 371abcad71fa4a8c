//! Tests for building the demo scheduler from configuration

use std::io;

use cooperative_scheduler::builders::build_demo;
use cooperative_scheduler::config::DemoConfig;
use cooperative_scheduler::core::{SchedulerError, StopReason, TaskStatus};

fn quick_config() -> DemoConfig {
    DemoConfig {
        range_start: 24,
        range_end: 30,
        interval_ms: 0,
        work_ms: 0,
        ..DemoConfig::default()
    }
}

#[test]
fn test_build_demo_adds_two_tasks() {
    let demo = build_demo(&quick_config(), io::sink()).unwrap();
    assert_eq!(demo.search, 0);
    assert_eq!(demo.spinner, 1);
    assert_eq!(demo.scheduler.runnable_ids(), vec![0, 1]);
}

#[test]
fn test_demo_run_finds_first_prime() {
    let mut demo = build_demo(&quick_config(), io::sink()).unwrap();
    let report = demo.scheduler.run_until([demo.search]).unwrap();

    assert_eq!(report.stop, StopReason::WaitSetSatisfied);
    assert_eq!(demo.scheduler.completed_value(demo.search), Some(&29));
    assert_eq!(demo.scheduler.status(demo.spinner), Some(TaskStatus::Runnable));
}

#[test]
fn test_demo_range_without_prime() {
    let cfg = DemoConfig {
        range_start: 24,
        range_end: 29,
        ..quick_config()
    };
    let mut demo = build_demo(&cfg, io::sink()).unwrap();
    demo.scheduler.run_until([demo.search]).unwrap();
    assert_eq!(demo.scheduler.status(demo.search), Some(TaskStatus::Failed));
}

#[test]
fn test_build_demo_rejects_invalid_config() {
    let cfg = DemoConfig {
        range_start: 5,
        range_end: 1,
        ..DemoConfig::default()
    };
    assert!(matches!(
        build_demo(&cfg, io::sink()),
        Err(SchedulerError::InvalidConfig(_))
    ));
}
