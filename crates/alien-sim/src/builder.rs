//! Fluent builder for constructing a [`World`].

use std::path::Path;

use alien_core::{RandIndex, SimRng};
use alien_map::{WorldMap, complete_map, load_map};

use crate::{EventSender, SimError, SimResult, World};

/// Fluent builder for [`World`].
///
/// # Required inputs
///
/// - [`WorldMap`] — normally already passed through
///   [`alien_map::complete_map`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                              |
/// |-----------------|--------------------------------------|
/// | `.events(tx)`   | No events are sent                   |
/// | `.seed(s)`      | Unseeded `SimRng` (OS entropy)       |
/// | `.rng(r)`       | Same as above; overrides `.seed`     |
///
/// # Example
///
/// ```rust,ignore
/// let (tx, rx) = event_channel();
/// let world = WorldBuilder::new(map)
///     .events(tx)
///     .seed(42)
///     .build()?;
/// world.spawn(3);
/// ```
pub struct WorldBuilder {
    map:    WorldMap,
    events: Option<EventSender>,
    rng:    Option<Box<dyn RandIndex>>,
}

impl WorldBuilder {
    pub fn new(map: WorldMap) -> Self {
        Self { map, events: None, rng: None }
    }

    /// Load a map file and complete it, ready for [`build`](Self::build).
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let mut map = load_map(path)?;
        complete_map(&mut map)?;
        Ok(Self::new(map))
    }

    /// Send events to `tx`.  The world closes the channel when it terminates.
    pub fn events(mut self, tx: EventSender) -> Self {
        self.events = Some(tx);
        self
    }

    /// Use a `SimRng` seeded with `seed`, for a repeatable run.
    pub fn seed(self, seed: u64) -> Self {
        self.rng(SimRng::new(seed))
    }

    /// Use a custom random-index source (e.g. a
    /// [`ScriptedIndex`][alien_core::ScriptedIndex] in tests).
    pub fn rng<R: RandIndex + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Validate inputs and return a ready-to-step [`World`].
    pub fn build(self) -> SimResult<World> {
        if self.map.is_empty() {
            return Err(SimError::EmptyMap);
        }
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(SimRng::from_entropy()));
        Ok(World::with_rng(self.map, self.events, rng))
    }
}
