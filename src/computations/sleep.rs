//! Timed suspension.

use std::time::{Duration, Instant};

use crate::core::{Computation, Step};

/// Suspends until a wall-clock deadline has passed.
///
/// The deadline is fixed on the first resume, which always suspends. Every
/// later resume completes if the deadline has passed and suspends otherwise,
/// so even a zero interval gives other tasks one turn.
#[derive(Debug, Clone)]
pub struct Sleep {
    interval: Duration,
    started: bool,
    deadline: Option<Instant>,
}

/// Computation that suspends for at least `interval`.
#[must_use]
pub const fn sleep(interval: Duration) -> Sleep {
    Sleep {
        interval,
        started: false,
        deadline: None,
    }
}

impl Sleep {
    /// Requested interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl Computation for Sleep {
    type Output = ();

    fn resume(&mut self) -> Step<()> {
        if !self.started {
            self.started = true;
            // An interval too large for Instant never expires.
            self.deadline = Instant::now().checked_add(self.interval);
            return Step::Suspend;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Step::Complete(()),
            _ => Step::Suspend,
        }
    }
}
