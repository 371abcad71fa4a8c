//! Builders to construct schedulers from configuration.

pub mod demo_builder;

pub use demo_builder::{build_demo, Demo};
