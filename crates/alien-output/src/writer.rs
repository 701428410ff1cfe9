//! The `EventWriter` trait implemented by all backends.

use alien_sim::Event;

use crate::OutputResult;

/// A sink for simulation events.
///
/// Implemented by [`LinePrinter`][crate::LinePrinter] and
/// [`CsvEventWriter`][crate::CsvEventWriter]; pairs and `Option`s of writers
/// are writers too, so several backends can be fed from one stream.
pub trait EventWriter {
    /// Write one event.  `seq` is its 1-based position in the stream.
    fn write_event(&mut self, seq: u64, event: &Event) -> OutputResult<()>;

    /// Flush everything written so far.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: EventWriter> EventWriter for Option<W> {
    fn write_event(&mut self, seq: u64, event: &Event) -> OutputResult<()> {
        match self {
            Some(w) => w.write_event(seq, event),
            None    => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None    => Ok(()),
        }
    }
}

impl<A: EventWriter, B: EventWriter> EventWriter for (A, B) {
    /// Both writers see every event, even if the first one fails.
    fn write_event(&mut self, seq: u64, event: &Event) -> OutputResult<()> {
        let first = self.0.write_event(seq, event);
        let second = self.1.write_event(seq, event);
        first.and(second)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
