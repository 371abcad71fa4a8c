//! # Cooperative Scheduler
//!
//! A single-threaded, cooperative, round-robin scheduler for resumable
//! computations.
//!
//! A computation is an explicit state machine implementing
//! [`Computation`](core::Computation). Each time the scheduler resumes it, the
//! computation runs to its next suspension point and reports a
//! [`Step`](core::Step): suspended, completed with a value, or failed with an
//! error. Suspended tasks go to the back of the queue, so every runnable task
//! gets one step per pass. Terminal tasks leave the queue and their outcome is
//! recorded exactly once.
//!
//! ## Key Features
//!
//! - **Round-robin fairness**: strict FIFO with requeue on suspension
//! - **Selective waiting**: run until a chosen set of tasks is terminal,
//!   leaving the rest queued for a later run
//! - **Isolated failures**: a failing task is recorded, the others keep going
//! - **Protocol checking**: a suspension carrying a payload aborts the run
//! - **Composable computations**: nested computations forward their
//!   suspensions through [`delegate!`]
//!
//! ```rust
//! use cooperative_scheduler::computations::{is_prime, search, sleep, from_fn};
//! use cooperative_scheduler::core::{Computation, Scheduler, Step};
//! use std::time::Duration;
//!
//! let mut scheduler = Scheduler::new();
//! let prime = scheduler.add(search(1500u64..1600, |x: &u64| is_prime(*x)));
//!
//! // A task that never finishes does not hold up the run.
//! let mut ticker = sleep(Duration::ZERO);
//! scheduler.add(from_fn(move || match ticker.resume() {
//!     Step::Complete(()) => {
//!         ticker = sleep(Duration::ZERO);
//!         Step::Suspend
//!     }
//!     other => other.map(|()| 0),
//! }));
//!
//! scheduler.run_until([prime]).unwrap();
//! assert_eq!(scheduler.completed_value(prime), Some(&1511));
//! assert_eq!(scheduler.runnable_len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: computations, tasks and the scheduler.
pub mod core;
/// Ready-made computations and combinators.
pub mod computations;
/// Configuration models for the scheduler and demo.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Runtime adapters for async callers.
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
/// Shared utilities.
pub mod util;
