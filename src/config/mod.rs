#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_positive, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_WORKLOAD_SIZE: u64 = 120_000;
pub const DEFAULT_REPORT_EVERY: u64 = 200;
pub const DEFAULT_HEARTBEATS: u64 = 199;
pub const DEFAULT_INTERVAL_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunawaySettings {
    /// Square roots summed per iteration.
    pub workload_size: u64,
    pub report_every: u64,
    /// `None` loops forever.
    pub max_iterations: Option<u64>,
}

impl Default for RunawaySettings {
    fn default() -> Self {
        Self {
            workload_size: DEFAULT_WORKLOAD_SIZE,
            report_every: DEFAULT_REPORT_EVERY,
            max_iterations: None,
        }
    }
}

impl Validate for RunawaySettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("runaway.workload_size", self.workload_size, 1)?;
        validate_positive_number("runaway.report_every", self.report_every, 1)?;
        validate_optional_positive("runaway.max_iterations", self.max_iterations, 1)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveredSettings {
    pub heartbeats: u64,
    pub interval_ms: u64,
}

impl RecoveredSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for RecoveredSettings {
    fn default() -> Self {
        Self {
            heartbeats: DEFAULT_HEARTBEATS,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl Validate for RecoveredSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("recovered.heartbeats", self.heartbeats, 1)?;
        validate_positive_number("recovered.interval_ms", self.interval_ms, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixture_contract() {
        let runaway = RunawaySettings::default();
        assert_eq!(runaway.workload_size, 120_000);
        assert_eq!(runaway.report_every, 200);
        assert_eq!(runaway.max_iterations, None);
        assert!(runaway.validate().is_ok());

        let recovered = RecoveredSettings::default();
        assert_eq!(recovered.heartbeats, 199);
        assert_eq!(recovered.interval(), Duration::from_millis(200));
        assert!(recovered.validate().is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        let runaway = RunawaySettings {
            report_every: 0,
            ..Default::default()
        };
        assert!(runaway.validate().is_err());

        let runaway = RunawaySettings {
            max_iterations: Some(0),
            ..Default::default()
        };
        assert!(runaway.validate().is_err());

        let recovered = RecoveredSettings {
            interval_ms: 0,
            ..Default::default()
        };
        assert!(recovered.validate().is_err());
    }
}
