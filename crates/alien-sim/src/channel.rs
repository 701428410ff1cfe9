//! Ordered, blocking hand-off of events from the world to one consumer.
//!
//! The channel has zero capacity: every send waits until the consumer takes
//! the event.  A world stepping with nobody draining its receiver therefore
//! blocks, so consumers should drain on their own thread:
//!
//! ```rust,ignore
//! let (tx, rx) = event_channel();
//! let printer = std::thread::spawn(move || {
//!     for event in rx {
//!         println!("e>{event}");
//!     }
//! });
//! let world = WorldBuilder::new(map).events(tx).build()?;
//! world.spawn(3);
//! world.run_to_end();
//! printer.join().unwrap();
//! ```
//!
//! End of stream is the sender being dropped, which the world does exactly
//! once, when it terminates.  The receiver's iterator then simply ends.

use crossbeam::channel::{self, Receiver, Sender};
use tracing::debug;

use crate::Event;

/// Receiving half.  Iterate it to drain events until the world terminates.
pub type EventReceiver = Receiver<Event>;

/// Create a connected sender/receiver pair.
pub fn event_channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = channel::bounded(0);
    (EventSender(tx), rx)
}

/// Sending half, owned by the world.  Not `Clone`: the world holds the only
/// sender, so dropping it is the end of the stream.
#[derive(Debug)]
pub struct EventSender(Sender<Event>);

impl EventSender {
    /// Block until the consumer takes `event`.
    ///
    /// If the receiver has already been dropped the event is discarded: the
    /// world keeps running without an audience.
    pub fn send(&self, event: Event) {
        if let Err(err) = self.0.send(event) {
            debug!(kind = err.0.kind(), "event receiver gone, dropping event");
        }
    }
}
