//! Primality test by trial division, yielding between candidate divisors.

use std::time::Duration;

use crate::computations::{sleep, Sleep};
use crate::core::{Computation, Step};
use crate::delegate;

/// Tests `x` for primality one divisor per step.
///
/// Values below 2 are not prime and finish without suspending. Otherwise each
/// divisor in `2..=isqrt(x)` is tried in turn; a divisor ends the test with
/// `false`, and after every non-divisor the test yields through a zero-length
/// [`Sleep`] before trying the next.
#[derive(Debug, Clone)]
pub struct IsPrime {
    x: u64,
    divisor: u64,
    limit: u64,
    work: Duration,
    pause: Option<Sleep>,
}

/// Primality test of `x`.
#[must_use]
pub const fn is_prime(x: u64) -> IsPrime {
    IsPrime {
        x,
        divisor: 2,
        limit: x.isqrt(),
        work: Duration::ZERO,
        pause: None,
    }
}

impl IsPrime {
    /// Block for `work` before each trial division, standing in for an
    /// expensive check.
    #[must_use]
    pub const fn with_work(mut self, work: Duration) -> Self {
        self.work = work;
        self
    }
}

impl Computation for IsPrime {
    type Output = bool;

    fn resume(&mut self) -> Step<bool> {
        if self.x < 2 {
            return Step::Complete(false);
        }
        loop {
            if let Some(pause) = self.pause.as_mut() {
                if let Err(err) = delegate!(pause.resume()) {
                    return Step::Fail(err);
                }
                self.pause = None;
                self.divisor += 1;
            }
            if self.divisor > self.limit {
                return Step::Complete(true);
            }
            if !self.work.is_zero() {
                std::thread::sleep(self.work);
            }
            if self.x % self.divisor == 0 {
                return Step::Complete(false);
            }
            self.pause = Some(sleep(Duration::ZERO));
        }
    }
}
