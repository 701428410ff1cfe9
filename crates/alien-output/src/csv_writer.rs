//! CSV output backend.
//!
//! One row per event, with a fixed header even when no event is written:
//!
//! ```csv
//! seq,kind,city,aliens
//! 1,city_destroyed,Bar,A1 A3
//! 2,city_has_no_neighbors,Bee,
//! ```

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use alien_sim::Event;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

/// Writes events to a CSV file.
pub struct CsvEventWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvEventWriter {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut rows = WriterBuilder::new().has_headers(false).from_path(path)?;
        rows.write_record(EventRow::HEADERS)?;
        Ok(Self { rows, finished: false })
    }
}

impl EventWriter for CsvEventWriter {
    fn write_event(&mut self, seq: u64, event: &Event) -> OutputResult<()> {
        self.rows.serialize(EventRow::new(seq, event))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
