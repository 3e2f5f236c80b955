use crate::config::toml_config::{FixtureConfig, LoggingConfig};
use crate::config::{RecoveredSettings, RunawaySettings};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Args, Parser};

/// Flags shared by both fixtures. All are optional; with none given the
/// fixtures run with their built-in behaviour.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit diagnostics as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Log process CPU and memory usage
    #[arg(long)]
    pub monitor: bool,
}

impl CommonArgs {
    pub fn load_config(&self) -> Result<FixtureConfig> {
        match &self.config {
            Some(path) => {
                validate_non_empty_string("config", path)?;
                let config = FixtureConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(FixtureConfig::default()),
        }
    }

    pub fn logging(&self, config: &FixtureConfig) -> LoggingConfig {
        LoggingConfig {
            verbose: self.verbose || config.logging.verbose,
            json: self.log_json || config.logging.json,
        }
    }

    pub fn monitoring_enabled(&self, config: &FixtureConfig) -> bool {
        self.monitor || config.monitoring.enabled
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "runaway")]
#[command(about = "Simulated runaway worker: burns CPU and never exits")]
pub struct RunawayArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Square roots summed per iteration
    #[arg(long)]
    pub workload_size: Option<u64>,

    /// Emit the failure line every N iterations
    #[arg(long)]
    pub report_every: Option<u64>,

    /// Stop after N iterations (default: never)
    #[arg(long)]
    pub max_iterations: Option<u64>,
}

impl RunawayArgs {
    /// CLI flags override the config file, which overrides the defaults.
    pub fn settings(&self, config: &FixtureConfig) -> Result<RunawaySettings> {
        let mut settings = config.runaway.clone();
        if let Some(size) = self.workload_size {
            settings.workload_size = size;
        }
        if let Some(every) = self.report_every {
            settings.report_every = every;
        }
        if self.max_iterations.is_some() {
            settings.max_iterations = self.max_iterations;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "recovered")]
#[command(about = "Simulated healthy worker: emits heartbeats, then exits")]
pub struct RecoveredArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of heartbeats before exiting
    #[arg(long)]
    pub heartbeats: Option<u64>,

    /// Pause after each heartbeat, in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

impl RecoveredArgs {
    pub fn settings(&self, config: &FixtureConfig) -> Result<RecoveredSettings> {
        let mut settings = config.recovered.clone();
        if let Some(heartbeats) = self.heartbeats {
            settings.heartbeats = heartbeats;
        }
        if let Some(interval_ms) = self.interval_ms {
            settings.interval_ms = interval_ms;
        }
        settings.validate()?;
        Ok(settings)
    }
}
