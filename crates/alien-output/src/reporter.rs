//! `Reporter<W>` — drains an event channel into an `EventWriter` on a
//! background thread.
//!
//! The world's event channel has no buffer, so something must be receiving
//! while the world steps.  The reporter is that something:
//!
//! ```rust,ignore
//! let (tx, rx) = event_channel();
//! let reporter = Reporter::spawn(rx, LinePrinter::new(std::io::stdout()));
//! let world = WorldBuilder::new(map).events(tx).build()?;
//! world.spawn(3);
//! world.run_to_end();
//! let printer = reporter.join()?;
//! ```

use std::panic;
use std::thread::{self, JoinHandle};

use tracing::debug;

use alien_sim::EventReceiver;

use crate::writer::EventWriter;
use crate::{OutputError, OutputResult};

/// Handle to a running reporter thread.
pub struct Reporter<W> {
    handle: JoinHandle<OutputResult<W>>,
}

impl<W: EventWriter + Send + 'static> Reporter<W> {
    /// Start draining `rx` into `writer`.
    ///
    /// The thread keeps receiving after a write error so the world never
    /// blocks on a dead consumer; the first error is reported by
    /// [`join`](Self::join).
    pub fn spawn(rx: EventReceiver, mut writer: W) -> Self {
        let handle = thread::spawn(move || {
            let mut last_error: Option<OutputError> = None;
            let mut seq = 0;
            for event in rx {
                seq += 1;
                if let Err(e) = writer.write_event(seq, &event) {
                    // Keep only the first error.
                    last_error.get_or_insert(e);
                }
            }
            if let Err(e) = writer.finish() {
                last_error.get_or_insert(e);
            }
            debug!(events = seq, "event stream closed");
            match last_error {
                Some(e) => Err(e),
                None    => Ok(writer),
            }
        });
        Self { handle }
    }

    /// Wait for the event stream to close and return the writer.
    ///
    /// Only returns once the world has terminated (or dropped its sender).
    pub fn join(self) -> OutputResult<W> {
        match self.handle.join() {
            Ok(result) => result,
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}
