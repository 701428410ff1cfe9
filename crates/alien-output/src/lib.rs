//! `alien-output` — event reporters for the rust_aliens simulation.
//!
//! | Backend            | Output                                  |
//! |--------------------|-----------------------------------------|
//! | [`LinePrinter`]    | `e>{event}` lines on any `io::Write`    |
//! | [`CsvEventWriter`] | `seq,kind,city,aliens` rows in a CSV file |
//!
//! Both implement [`EventWriter`] and are driven by [`Reporter`], which
//! drains the world's event channel on a background thread.
//!
//! # Usage
//!
//! ```rust,ignore
//! use alien_output::{CsvEventWriter, LinePrinter, Reporter};
//!
//! let csv = CsvEventWriter::new(Path::new("events.csv"))?;
//! let reporter = Reporter::spawn(rx, (LinePrinter::new(std::io::stdout()), csv));
//! world.run_to_end();
//! reporter.join()?;
//! ```

pub mod csv_writer;
pub mod error;
pub mod printer;
pub mod reporter;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv_writer::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use printer::LinePrinter;
pub use reporter::Reporter;
pub use row::EventRow;
pub use writer::EventWriter;
