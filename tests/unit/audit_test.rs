//! Tests for audit sink

use std::sync::Arc;

use cooperative_scheduler::computations::{fail, ready, suspend_then};
use cooperative_scheduler::core::{
    build_audit_event, AuditAction, AuditSink, InMemoryAuditSink, Scheduler,
};
use parking_lot::Mutex;

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(3, 9, AuditAction::Completed);
    assert_eq!(event.seq, 3);
    assert_eq!(event.task_id, 9);
    assert_eq!(event.action, AuditAction::Completed);
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);
    sink.record(build_audit_event(0, 0, AuditAction::Added));
    sink.record(build_audit_event(1, 1, AuditAction::Added));
    sink.record(build_audit_event(2, 2, AuditAction::Added));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].seq, 1); // First one popped
    assert_eq!(events[1].seq, 2);
}

#[test]
fn test_scheduler_records_lifecycle() {
    let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(64)));
    let mut scheduler = Scheduler::new().with_audit(Box::new(Arc::clone(&sink)));
    let a = scheduler.add(suspend_then(1, 1));
    let b = scheduler.add(fail(anyhow::anyhow!("no")));
    let c = scheduler.add(ready(3));
    scheduler.run_all().unwrap();

    let events = sink.lock().events();
    let actions: Vec<_> = events.iter().map(|e| (e.task_id, e.action)).collect();
    assert_eq!(
        actions,
        vec![
            (a, AuditAction::Added),
            (b, AuditAction::Added),
            (c, AuditAction::Added),
            (a, AuditAction::Suspended),
            (b, AuditAction::Failed),
            (c, AuditAction::Completed),
            (a, AuditAction::Completed),
        ]
    );
    let seqs: Vec<u64> = events.iter().map(|e| e.seq).collect();
    assert_eq!(seqs, (0..7).collect::<Vec<_>>());
}

#[test]
fn test_audit_event_serializes() {
    let event = build_audit_event(0, 1, AuditAction::Violated);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["action"], "violated");
    assert_eq!(json["task_id"], 1);
}
