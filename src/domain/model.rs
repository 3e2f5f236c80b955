use std::fmt;

/// A line a worker writes to stdout. The harness matches on these strings,
/// so their text is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLine {
    RunawayStarted,
    RequestFailed,
    HealthyRestarted,
    Heartbeat(u64),
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLine::RunawayStarted => f.write_str("runaway worker started"),
            LogLine::RequestFailed => {
                f.write_str("processing request 4242 failed, retrying endlessly")
            }
            LogLine::HealthyRestarted => f.write_str("healthy worker restarted"),
            LogLine::Heartbeat(i) => write!(f, "heartbeat {}: service healthy", i),
        }
    }
}

/// Loop counter. Starts at zero; `advance` returns the new value, so the
/// first iteration is 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IterationCounter {
    value: u64,
}

impl IterationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> u64 {
        self.value += 1;
        self.value
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u64,
    /// Includes the startup line.
    pub lines_emitted: u64,
}
