//! Configuration for the demonstration binary.

use serde::{Deserialize, Serialize};

use super::SchedulerConfig;

/// Environment variable naming a JSON file with a [`DemoConfig`].
pub const DEMO_CONFIG_ENV: &str = "DEMO_CONFIG";

/// What the demo searches and how its spinner behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// First candidate checked for primality (inclusive).
    pub range_start: u64,
    /// End of the candidate range (exclusive).
    pub range_end: u64,
    /// Text printed next to the spinner.
    pub message: String,
    /// Delay between spinner frames in milliseconds.
    pub interval_ms: u64,
    /// Blocking work per trial division in milliseconds.
    pub work_ms: u64,
    /// Scheduler tunables.
    pub scheduler: SchedulerConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            range_start: 1500,
            range_end: 1600,
            message: "Working ...".into(),
            interval_ms: 250,
            work_ms: 100,
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.range_end <= self.range_start {
            return Err(format!(
                "range_end ({}) must be greater than range_start ({})",
                self.range_end, self.range_start
            ));
        }
        self.scheduler
            .validate()
            .map_err(|e| format!("scheduler invalid: {e}"))
    }

    /// Parse demo configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a message if the input does not parse or fails validation.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the file named by `DEMO_CONFIG`, after reading
    /// a `.env` file if present. Falls back to defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns a message if the file cannot be read or its contents are invalid.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();
        match std::env::var(DEMO_CONFIG_ENV) {
            Ok(path) => {
                let input = std::fs::read_to_string(&path)
                    .map_err(|e| format!("cannot read {path}: {e}"))?;
                Self::from_json_str(&input)
            }
            Err(_) => Ok(Self::default()),
        }
    }
}
