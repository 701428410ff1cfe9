//! Human-readable event lines: `e>{event}`.

use std::io::Write;

use alien_sim::Event;

use crate::writer::EventWriter;
use crate::OutputResult;

/// Writes each event as one `e>`-prefixed line.
///
/// A destroyed-city event renders over two lines (the alien list is on a
/// tab-indented second line); the prefix appears only on the first.
pub struct LinePrinter<W: Write> {
    out: W,
}

impl<W: Write> LinePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventWriter for LinePrinter<W> {
    fn write_event(&mut self, _seq: u64, event: &Event) -> OutputResult<()> {
        writeln!(self.out, "e>{event}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
