//! Round-robin scheduler driving resumable computations.

use std::collections::{BTreeMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::core::{
    build_audit_event, AuditAction, AuditSink, Computation, SchedulerError, Step, Task, TaskId,
    TaskIdAllocator,
};

/// Set of task ids a run waits on.
pub type WaitSet = HashSet<TaskId>;

/// Where a task currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Queued and waiting for its next step.
    Runnable,
    /// Finished with a value stored in [`Scheduler::completed`].
    Completed,
    /// Finished with an error stored in [`Scheduler::failed`].
    Failed,
}

/// What a single scheduler step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The task suspended and was requeued at the back.
    Suspended(TaskId),
    /// The task completed and was removed.
    Completed(TaskId),
    /// The task failed and was removed.
    Failed(TaskId),
}

impl StepOutcome {
    /// Task the step was taken for.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match *self {
            Self::Suspended(id) | Self::Completed(id) | Self::Failed(id) => id,
        }
    }
}

/// Why a run returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Nothing is runnable any more.
    #[default]
    Drained,
    /// No task in the wait-set is still runnable.
    WaitSetSatisfied,
    /// The configured per-run step budget ran out.
    BudgetExhausted,
}

/// Counters for one call to [`Scheduler::run_to_completion`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Steps taken.
    pub steps: u64,
    /// Steps that ended in suspension.
    pub suspended: u64,
    /// Tasks that completed.
    pub completed: u64,
    /// Tasks that failed.
    pub failed: u64,
    /// Why the run stopped.
    pub stop: StopReason,
}

impl RunReport {
    fn record(&mut self, outcome: StepOutcome) {
        self.steps += 1;
        match outcome {
            StepOutcome::Suspended(_) => self.suspended += 1,
            StepOutcome::Completed(_) => self.completed += 1,
            StepOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Single-threaded cooperative scheduler.
///
/// Tasks run in FIFO order. A task that suspends goes to the back of the
/// queue, so every runnable task gets exactly one step per pass. A task that
/// completes or fails leaves the queue and its outcome is recorded once, never
/// to be changed. Every added id is therefore in exactly one of the runnable
/// queue, [`completed`](Self::completed) or [`failed`](Self::failed).
///
/// ```
/// use cooperative_scheduler::computations::suspend_then;
/// use cooperative_scheduler::core::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// let a = scheduler.add(suspend_then(3, "a"));
/// let b = scheduler.add(suspend_then(3, "b"));
/// scheduler.run_all().unwrap();
///
/// assert_eq!(scheduler.completed_value(a), Some(&"a"));
/// assert_eq!(scheduler.completed_value(b), Some(&"b"));
/// assert!(scheduler.is_idle());
/// ```
pub struct Scheduler<T> {
    runnable: VecDeque<Task<T>>,
    completed: BTreeMap<TaskId, T>,
    failed: BTreeMap<TaskId, anyhow::Error>,
    ids: TaskIdAllocator,
    config: SchedulerConfig,
    audit: Option<Box<dyn AuditSink>>,
    audit_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runnable: VecDeque::new(),
            completed: BTreeMap::new(),
            failed: BTreeMap::new(),
            ids: TaskIdAllocator::new(),
            config: SchedulerConfig::default(),
            audit: None,
            audit_seq: 0,
        }
    }

    /// Create an empty scheduler from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidConfig`] if validation fails.
    pub fn from_config(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        config.validate().map_err(SchedulerError::InvalidConfig)?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Draw task ids from `ids` instead of a private counter.
    #[must_use]
    pub fn with_ids(mut self, ids: TaskIdAllocator) -> Self {
        self.ids = ids;
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Register a computation and queue it at the back. Returns its id.
    pub fn add<C>(&mut self, computation: C) -> TaskId
    where
        C: Computation<Output = T> + Send + 'static,
    {
        let id = self.ids.allocate();
        self.runnable.push_back(Task::new(id, Box::new(computation)));
        self.record_audit(id, AuditAction::Added);
        tracing::debug!(task_id = id, runnable = self.runnable.len(), "task added");
        id
    }

    /// Resume the task at the front of the queue by exactly one step.
    ///
    /// Returns `Ok(None)` when nothing is runnable.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::ProtocolViolation`] if the computation
    /// suspended with a payload. The task is dropped and the violation is also
    /// recorded in [`failed`](Self::failed).
    pub fn step(&mut self) -> Result<Option<StepOutcome>, SchedulerError> {
        let Some(mut task) = self.runnable.pop_front() else {
            return Ok(None);
        };
        let id = task.id();

        let step = task.resume();
        let outcome = match step {
            Step::Suspend => {
                self.runnable.push_back(task);
                self.record_audit(id, AuditAction::Suspended);
                if self.config.trace_steps {
                    tracing::debug!(task_id = id, "task suspended");
                }
                StepOutcome::Suspended(id)
            }
            Step::Complete(value) => {
                self.completed.insert(id, value);
                self.record_audit(id, AuditAction::Completed);
                tracing::debug!(task_id = id, "task completed");
                StepOutcome::Completed(id)
            }
            Step::Fail(err) => {
                tracing::debug!(task_id = id, error = %err, "task failed");
                self.failed.insert(id, err);
                self.record_audit(id, AuditAction::Failed);
                StepOutcome::Failed(id)
            }
            Step::Yield(payload) => {
                let violation = SchedulerError::ProtocolViolation {
                    task_id: id,
                    payload,
                };
                tracing::error!(task_id = id, "{}", violation);
                self.failed.insert(id, anyhow::Error::new(violation.clone()));
                self.record_audit(id, AuditAction::Violated);
                return Err(violation);
            }
        };
        Ok(Some(outcome))
    }

    /// Run tasks round-robin.
    ///
    /// Without a wait-set the run lasts until nothing is runnable. With one it
    /// returns as soon as no runnable task belongs to the set, which includes
    /// the case of an empty set or a set of ids that were never added. Calling
    /// again picks up where the queue was left.
    ///
    /// # Errors
    ///
    /// Propagates [`SchedulerError::ProtocolViolation`] from [`step`](Self::step).
    /// Task failures are not errors; they land in [`failed`](Self::failed).
    pub fn run_to_completion(
        &mut self,
        wait_for: Option<&WaitSet>,
    ) -> Result<RunReport, SchedulerError> {
        let mut report = RunReport::default();
        tracing::debug!(
            runnable = self.runnable.len(),
            waiting_on = ?wait_for,
            "run started"
        );

        report.stop = loop {
            if self.runnable.is_empty() {
                break StopReason::Drained;
            }
            if let Some(wait) = wait_for {
                if !self.runnable.iter().any(|task| wait.contains(&task.id())) {
                    break StopReason::WaitSetSatisfied;
                }
            }
            if self
                .config
                .max_steps_per_run
                .is_some_and(|budget| report.steps >= budget)
            {
                break StopReason::BudgetExhausted;
            }
            match self.step()? {
                Some(outcome) => report.record(outcome),
                None => break StopReason::Drained,
            }
        };

        tracing::info!(
            steps = report.steps,
            completed = report.completed,
            failed = report.failed,
            remaining = self.runnable.len(),
            stop = ?report.stop,
            "run finished"
        );
        Ok(report)
    }

    /// Run until every id in `ids` has reached a terminal outcome.
    ///
    /// # Errors
    ///
    /// See [`run_to_completion`](Self::run_to_completion).
    pub fn run_until<I>(&mut self, ids: I) -> Result<RunReport, SchedulerError>
    where
        I: IntoIterator<Item = TaskId>,
    {
        let wait: WaitSet = ids.into_iter().collect();
        self.run_to_completion(Some(&wait))
    }

    /// Run until nothing is runnable.
    ///
    /// # Errors
    ///
    /// See [`run_to_completion`](Self::run_to_completion).
    pub fn run_all(&mut self) -> Result<RunReport, SchedulerError> {
        self.run_to_completion(None)
    }

    /// Where task `id` currently lives, or `None` if it was never added here.
    #[must_use]
    pub fn status(&self, id: TaskId) -> Option<TaskStatus> {
        if self.completed.contains_key(&id) {
            Some(TaskStatus::Completed)
        } else if self.failed.contains_key(&id) {
            Some(TaskStatus::Failed)
        } else if self.runnable.iter().any(|task| task.id() == id) {
            Some(TaskStatus::Runnable)
        } else {
            None
        }
    }

    /// Ids of runnable tasks in the order they will next be stepped.
    #[must_use]
    pub fn runnable_ids(&self) -> Vec<TaskId> {
        self.runnable.iter().map(Task::id).collect()
    }

    /// Number of runnable tasks.
    #[must_use]
    pub fn runnable_len(&self) -> usize {
        self.runnable.len()
    }

    /// Whether nothing is runnable.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.runnable.is_empty()
    }

    /// Values of completed tasks keyed by id.
    #[must_use]
    pub const fn completed(&self) -> &BTreeMap<TaskId, T> {
        &self.completed
    }

    /// Errors of failed tasks keyed by id.
    #[must_use]
    pub const fn failed(&self) -> &BTreeMap<TaskId, anyhow::Error> {
        &self.failed
    }

    /// Value task `id` completed with.
    #[must_use]
    pub fn completed_value(&self, id: TaskId) -> Option<&T> {
        self.completed.get(&id)
    }

    /// Error task `id` failed with.
    #[must_use]
    pub fn failure(&self, id: TaskId) -> Option<&anyhow::Error> {
        self.failed.get(&id)
    }

    /// Allocator this scheduler draws ids from.
    #[must_use]
    pub const fn ids(&self) -> &TaskIdAllocator {
        &self.ids
    }

    fn record_audit(&mut self, task_id: TaskId, action: AuditAction) {
        if let Some(sink) = self.audit.as_mut() {
            sink.record(build_audit_event(self.audit_seq, task_id, action));
            self.audit_seq += 1;
        }
    }
}
