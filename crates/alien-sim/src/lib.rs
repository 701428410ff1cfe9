//! `alien-sim` — the step loop of the rust_aliens simulation.
//!
//! # Step loop
//!
//! ```text
//! while world.step():
//!   ① Move   — each movable alien walks a random road (or is trapped).
//!   ② Fight  — cities with ≥ 2 aliens are destroyed with their aliens;
//!              roads into them are dropped; newly road-less cities are
//!              reported once.
//!   ③ Check  — no alien can move → terminate and close the event channel.
//! ```
//!
//! Aliens stop moving after [`MAX_ALIEN_MOVES`] moves, so every run ends.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use alien_sim::{WorldBuilder, event_channel};
//!
//! let (tx, rx) = event_channel();
//! let reporter = std::thread::spawn(move || rx.into_iter().count());
//! let world = WorldBuilder::from_file(path)?.events(tx).build()?;
//! world.spawn(10);
//! world.run_to_end();
//! let events_seen = reporter.join().unwrap();
//! ```

pub mod alien;
pub mod builder;
pub mod channel;
pub mod error;
pub mod event;
pub mod world;


pub use alien::{Alien, MAX_ALIEN_MOVES};
pub use builder::WorldBuilder;
pub use channel::{EventReceiver, EventSender, event_channel};
pub use error::{SimError, SimResult};
pub use event::Event;
pub use world::World;
