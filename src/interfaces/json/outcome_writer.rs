use crate::domain::payment::OrchestrationOutcome;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes pretty-printed JSON documents, one per call, each followed by a newline.
pub struct OutcomeWriter<W: Write> {
    writer: W,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_outcome(&mut self, outcome: &OrchestrationOutcome) -> Result<()> {
        self.write_json(outcome)
    }

    pub fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
