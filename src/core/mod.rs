pub mod recovered;
pub mod runaway;
pub mod workload;

pub use crate::domain::model::{IterationCounter, LogLine, RunSummary};
pub use crate::domain::ports::LineSink;
pub use crate::utils::error::Result;
