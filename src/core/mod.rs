//! Core scheduling abstractions: the computation contract, tasks and the
//! round-robin scheduler.

pub mod audit;
pub mod computation;
pub mod error;
pub mod scheduler;
pub mod task;

pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use computation::{Computation, Step};
pub use error::{AppResult, ComputationError, SchedulerError};
pub use scheduler::{RunReport, Scheduler, StepOutcome, StopReason, TaskStatus, WaitSet};
pub use task::{Task, TaskId, TaskIdAllocator};
