//! Tests for driving a scheduler from async code.

#![cfg(feature = "tokio-runtime")]

use cooperative_scheduler::computations::{from_fn, suspend_then};
use cooperative_scheduler::core::{Scheduler, SchedulerError, Step, StopReason, WaitSet};
use cooperative_scheduler::runtime::run_blocking;

#[tokio::test]
async fn test_run_blocking_returns_scheduler() {
    let mut scheduler = Scheduler::new();
    let a = scheduler.add(suspend_then(3, 10u32));
    let b = scheduler.add(suspend_then(1, 20u32));

    let run = run_blocking(scheduler, None).await.unwrap();

    let report = run.result.unwrap();
    assert_eq!(report.stop, StopReason::Drained);
    assert_eq!(run.scheduler.completed_value(a), Some(&10));
    assert_eq!(run.scheduler.completed_value(b), Some(&20));
}

#[tokio::test]
async fn test_run_blocking_with_wait_set() {
    let mut scheduler = Scheduler::new();
    let a = scheduler.add(suspend_then(2, 1u8));
    let b = scheduler.add(from_fn(|| Step::Suspend));

    let wait: WaitSet = [a].into_iter().collect();
    let run = run_blocking(scheduler, Some(wait)).await.unwrap();

    assert_eq!(run.result.unwrap().stop, StopReason::WaitSetSatisfied);
    assert_eq!(run.scheduler.runnable_ids(), vec![b]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_blocking_reports_violation() {
    let mut scheduler = Scheduler::<()>::new();
    let rogue = scheduler.add(from_fn(|| Step::Yield(serde_json::json!(1))));

    let run = run_blocking(scheduler, None).await.unwrap();

    assert!(matches!(
        run.result,
        Err(SchedulerError::ProtocolViolation { task_id, .. }) if task_id == rogue
    ));
    assert!(run.scheduler.failure(rogue).is_some());
}
