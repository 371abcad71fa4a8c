//! Tests for error types

use cooperative_scheduler::core::{ComputationError, SchedulerError};

#[test]
fn test_protocol_violation_error() {
    let err = SchedulerError::ProtocolViolation {
        task_id: 4,
        payload: serde_json::json!("hello"),
    };
    assert_eq!(
        format!("{}", err),
        "protocol violation: task 4 suspended with payload \"hello\""
    );
}

#[test]
fn test_invalid_config_error() {
    let err = SchedulerError::InvalidConfig("bad".to_string());
    assert_eq!(format!("{}", err), "invalid configuration: bad");
}

#[test]
fn test_backend_error() {
    let err = SchedulerError::Backend("join failed".to_string());
    assert_eq!(format!("{}", err), "backend error: join failed");
}

#[test]
fn test_computation_errors() {
    assert_eq!(format!("{}", ComputationError::NotFound), "not found");
    assert_eq!(format!("{}", ComputationError::Finished), "resumed after completion");
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    assert_eq!(format!("{}", ComputationError::from(io)), "io error: pipe closed");
}

#[test]
fn test_computation_error_survives_anyhow() {
    let err: anyhow::Error = ComputationError::NotFound.into();
    assert!(matches!(
        err.downcast_ref::<ComputationError>(),
        Some(ComputationError::NotFound)
    ));
}
