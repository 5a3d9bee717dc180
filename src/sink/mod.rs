//! Where the suggestions go.

mod trello;

pub use trello::*;

use std::io::Write;

use crate::planner::Suggestion;

/// Receives the suggestions of the planner.
pub trait TaskBoardSink {
    fn publish(&mut self, suggestions: &[Suggestion]) -> anyhow::Result<()>;
}

/// Writes the suggestions as pretty printed json.
#[derive(Debug)]
pub struct JsonSink<W> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes anything that can be serialized, not only suggestions.
    pub fn write<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TaskBoardSink for JsonSink<W> {
    fn publish(&mut self, suggestions: &[Suggestion]) -> anyhow::Result<()> {
        self.write(suggestions)
    }
}
