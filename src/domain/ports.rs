use crate::domain::model::LogLine;
use crate::utils::error::Result;
use std::io::Write;

/// Destination for fixture lines.
pub trait LineSink {
    fn emit(&mut self, line: LogLine) -> Result<()>;
}

/// Any writer is a sink. Each line is flushed immediately so a harness
/// reading a pipe sees it without waiting for a buffer to fill.
impl<W: Write> LineSink for W {
    fn emit(&mut self, line: LogLine) -> Result<()> {
        writeln!(self, "{}", line)?;
        self.flush()?;
        Ok(())
    }
}
