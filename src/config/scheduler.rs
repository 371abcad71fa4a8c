//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Tunables for a [`Scheduler`](crate::core::Scheduler).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Upper bound on steps taken by one `run_to_completion` call.
    /// `None` means unbounded.
    pub max_steps_per_run: Option<u64>,
    /// Emit a debug record for every suspension, not just terminal steps.
    pub trace_steps: bool,
}

impl SchedulerConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_steps_per_run == Some(0) {
            return Err("max_steps_per_run must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a message if the input does not parse or fails validation.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
