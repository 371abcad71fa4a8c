//! Configuration models for the scheduler and the demonstration run.

pub mod demo;
pub mod scheduler;

pub use demo::DemoConfig;
pub use scheduler::SchedulerConfig;
