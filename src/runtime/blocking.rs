//! Drive a scheduler on tokio's blocking thread pool.
//!
//! A run steps computations back to back and may block inside them, so it must
//! not execute on an async worker thread. `run_blocking` moves the whole
//! scheduler onto `spawn_blocking` and hands it back when the run returns.

use crate::core::{RunReport, Scheduler, SchedulerError, WaitSet};

/// A scheduler returned from a blocking run, with the run's result.
pub struct BlockingRun<T> {
    /// The scheduler, in whatever state the run left it.
    pub scheduler: Scheduler<T>,
    /// What [`Scheduler::run_to_completion`] returned.
    pub result: Result<RunReport, SchedulerError>,
}

/// Run `scheduler` to completion on the blocking pool.
///
/// # Errors
///
/// Returns [`SchedulerError::Backend`] if the blocking task panicked or was
/// cancelled; the scheduler is lost in that case. Errors from the run itself
/// are reported in [`BlockingRun::result`].
pub async fn run_blocking<T>(
    mut scheduler: Scheduler<T>,
    wait_for: Option<WaitSet>,
) -> Result<BlockingRun<T>, SchedulerError>
where
    T: Send + 'static,
{
    let handle = tokio::task::spawn_blocking(move || {
        let result = scheduler.run_to_completion(wait_for.as_ref());
        BlockingRun { scheduler, result }
    });
    handle.await.map_err(|e| {
        tracing::error!("blocking run did not finish: {}", e);
        SchedulerError::Backend(format!("blocking run did not finish: {e}"))
    })
}
