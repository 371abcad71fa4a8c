//! Task identity and id allocation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::{Computation, Step};

/// Identifier assigned to a task when it is added to a scheduler.
pub type TaskId = u64;

/// Hands out strictly increasing task ids starting at 0.
///
/// Clones share the same counter, so schedulers built from clones of one
/// allocator never hand out the same id twice.
#[derive(Debug, Clone, Default)]
pub struct TaskIdAllocator {
    next: Arc<AtomicU64>,
}

impl TaskIdAllocator {
    /// Create an allocator whose first id is 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn allocate(&self) -> TaskId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    #[must_use]
    pub fn peek(&self) -> TaskId {
        self.next.load(Ordering::Relaxed)
    }
}

/// A computation paired with the id it was registered under.
pub struct Task<T> {
    id: TaskId,
    computation: Box<dyn Computation<Output = T> + Send>,
}

impl<T> Task<T> {
    pub(crate) fn new(id: TaskId, computation: Box<dyn Computation<Output = T> + Send>) -> Self {
        Self { id, computation }
    }

    /// Task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Advance the wrapped computation by one step.
    pub(crate) fn resume(&mut self) -> Step<T> {
        self.computation.resume()
    }
}

impl<T> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("id", &self.id).finish_non_exhaustive()
    }
}
