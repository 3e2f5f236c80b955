pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CommonArgs, RecoveredArgs, RunawayArgs};

pub use config::toml_config::FixtureConfig;
pub use config::{RecoveredSettings, RunawaySettings};
pub use crate::core::{recovered::RecoveredWorker, runaway::RunawayWorker};
pub use domain::model::{LogLine, RunSummary};
pub use domain::ports::LineSink;
pub use utils::error::{FixtureError, Result};
