//! Ready-made computations built on the [`Computation`](crate::core::Computation)
//! contract.
//!
//! The primitives ([`ready`], [`sleep`], [`suspend_then`]) are composed by
//! delegation into the composite ones ([`is_prime`], [`search`],
//! [`report_matches`], [`spinner`]).

pub mod basic;
pub mod prime;
pub mod search;
pub mod sequence;
pub mod sleep;
pub mod spinner;

pub use basic::{fail, from_fn, ready, suspend_then, Failing, FromFn, Ready, SuspendThen};
pub use prime::{is_prime, IsPrime};
pub use search::{report_matches, search, ReportMatches, Search};
pub use sequence::{lucas, Lucas};
pub use sleep::{sleep, Sleep};
pub use spinner::{spinner, Spinner, FRAMES};
