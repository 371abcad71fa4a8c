//! Runtime adapters for driving a scheduler from async code.

pub mod blocking;

pub use blocking::{run_blocking, BlockingRun};
