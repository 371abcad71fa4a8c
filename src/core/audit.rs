//! Audit trail of task lifecycle transitions.
//!
//! The scheduler reports every add and every step outcome to an optional
//! [`AuditSink`]. The in-memory sink keeps a bounded window of recent events,
//! which is enough to reconstruct the interleaving of a run.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::TaskId;
use crate::util::clock::now_ms;

/// Lifecycle transition recorded for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Task was added to the runnable queue.
    Added,
    /// Task suspended and went to the back of the queue.
    Suspended,
    /// Task completed with a value.
    Completed,
    /// Task failed with an error.
    Failed,
    /// Task broke the suspension protocol.
    Violated,
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Sequence number, unique per scheduler.
    pub seq: u64,
    /// Related task identifier.
    pub task_id: TaskId,
    /// Transition taken.
    pub action: AuditAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Task ids of the recorded events matching `action`, oldest first.
    #[must_use]
    pub fn task_ids(&self, action: AuditAction) -> Vec<TaskId> {
        self.events
            .iter()
            .filter(|e| e.action == action)
            .map(|e| e.task_id)
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Lets a caller keep a handle to a sink the scheduler also writes to.
impl<S> AuditSink for Arc<Mutex<S>>
where
    S: AuditSink,
{
    fn record(&mut self, event: AuditEvent) {
        self.lock().record(event);
    }
}

/// Helper to build an audit event stamped with the current time.
#[must_use]
pub fn build_audit_event(seq: u64, task_id: TaskId, action: AuditAction) -> AuditEvent {
    AuditEvent {
        seq,
        task_id,
        action,
        created_at_ms: now_ms(),
    }
}
