//! Builds the demonstration scheduler: a prime search alongside a spinner.

use std::io::Write;
use std::time::Duration;

use crate::computations::{is_prime, search, spinner};
use crate::config::DemoConfig;
use crate::core::{Scheduler, SchedulerError, TaskId};

/// A configured scheduler plus the ids of its demo tasks.
pub struct Demo {
    /// Scheduler holding both tasks.
    pub scheduler: Scheduler<u64>,
    /// The prime search; the run waits on this one.
    pub search: TaskId,
    /// The spinner, which never finishes on its own.
    pub spinner: TaskId,
}

/// Build the demo scheduler from configuration, drawing the spinner to `out`.
///
/// # Errors
///
/// Returns [`SchedulerError::InvalidConfig`] if the configuration is invalid.
pub fn build_demo<W>(cfg: &DemoConfig, out: W) -> Result<Demo, SchedulerError>
where
    W: Write + Send + 'static,
{
    cfg.validate().map_err(SchedulerError::InvalidConfig)?;

    let mut scheduler = Scheduler::from_config(cfg.scheduler.clone())?;
    let work = Duration::from_millis(cfg.work_ms);
    let search_id = scheduler.add(search(cfg.range_start..cfg.range_end, move |x: &u64| {
        is_prime(*x).with_work(work)
    }));
    let spinner_id = scheduler.add(spinner(
        out,
        cfg.message.clone(),
        Duration::from_millis(cfg.interval_ms),
    ));

    tracing::info!(
        search = search_id,
        spinner = spinner_id,
        range_start = cfg.range_start,
        range_end = cfg.range_end,
        "demo tasks added"
    );
    Ok(Demo {
        scheduler,
        search: search_id,
        spinner: spinner_id,
    })
}
