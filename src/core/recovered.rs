use crate::config::RecoveredSettings;
use crate::domain::model::{IterationCounter, LogLine, RunSummary};
use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use crate::utils::monitor::ProcessMonitor;
use crate::utils::validation::Validate;

/// Emits numbered heartbeats with a fixed pause after each one, then returns.
pub struct RecoveredWorker {
    settings: RecoveredSettings,
    monitor: ProcessMonitor,
}

impl RecoveredWorker {
    pub fn new(settings: RecoveredSettings) -> Self {
        Self::new_with_monitoring(settings, false)
    }

    pub fn new_with_monitoring(settings: RecoveredSettings, monitor_enabled: bool) -> Self {
        Self {
            settings,
            monitor: ProcessMonitor::new(monitor_enabled),
        }
    }

    pub fn settings(&self) -> &RecoveredSettings {
        &self.settings
    }

    pub async fn run<S: LineSink>(&self, sink: &mut S) -> Result<RunSummary> {
        self.settings.validate()?;
        sink.emit(LogLine::HealthyRestarted)?;
        let mut lines_emitted = 1;

        if self.monitor.is_enabled() {
            self.monitor.log_stats("startup");
        }

        let interval = self.settings.interval();
        let mut counter = IterationCounter::new();
        while counter.value() < self.settings.heartbeats {
            let beat = counter.advance();
            sink.emit(LogLine::Heartbeat(beat))?;
            lines_emitted += 1;
            tokio::time::sleep(interval).await;
        }

        tracing::debug!(heartbeats = counter.value(), "healthy worker finished");
        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }

        Ok(RunSummary {
            iterations: counter.value(),
            lines_emitted,
        })
    }
}
