use crate::config::RunawaySettings;
use crate::core::workload::{burn_cpu, is_report_iteration};
use crate::domain::model::{IterationCounter, LogLine, RunSummary};
use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use crate::utils::monitor::ProcessMonitor;
use crate::utils::validation::Validate;

/// Pins one core and reports a fake failure every `report_every` iterations.
pub struct RunawayWorker {
    settings: RunawaySettings,
    monitor: ProcessMonitor,
}

impl RunawayWorker {
    pub fn new(settings: RunawaySettings) -> Self {
        Self::new_with_monitoring(settings, false)
    }

    pub fn new_with_monitoring(settings: RunawaySettings, monitor_enabled: bool) -> Self {
        Self {
            settings,
            monitor: ProcessMonitor::new(monitor_enabled),
        }
    }

    pub fn settings(&self) -> &RunawaySettings {
        &self.settings
    }

    /// Runs until `max_iterations` is reached. With no limit this never
    /// returns except on a write error.
    pub fn run<S: LineSink>(&self, sink: &mut S) -> Result<RunSummary> {
        self.settings.validate()?;
        sink.emit(LogLine::RunawayStarted)?;
        let mut lines_emitted = 1;

        tracing::debug!(
            workload_size = self.settings.workload_size,
            report_every = self.settings.report_every,
            max_iterations = ?self.settings.max_iterations,
            "runaway loop starting"
        );

        let mut counter = IterationCounter::new();
        loop {
            if let Some(max) = self.settings.max_iterations {
                if counter.value() >= max {
                    break;
                }
            }

            let iteration = counter.advance();
            let _ = burn_cpu(self.settings.workload_size);

            if is_report_iteration(iteration, self.settings.report_every) {
                sink.emit(LogLine::RequestFailed)?;
                lines_emitted += 1;
                tracing::debug!(iteration, "failure line emitted");
                if self.monitor.is_enabled() {
                    self.monitor.log_stats(&format!("iteration {}", iteration));
                }
            }
        }

        Ok(RunSummary {
            iterations: counter.value(),
            lines_emitted,
        })
    }
}
