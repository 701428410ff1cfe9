//! The `World` and its step loop.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use alien_core::{RandIndex, SimRng};
use alien_map::WorldMap;
use tracing::{debug, warn};

use crate::{Alien, Event, EventSender};

// ── World ─────────────────────────────────────────────────────────────────────

/// The simulation: a map, the aliens on it, and where to report events.
///
/// Every public method takes the world's single lock for its whole duration,
/// so `spawn`, `step` and the snapshot accessors are linearizable and never
/// observe a half-finished step.  Events are sent while the lock is held.
///
/// Each [`step`](Self::step) runs three phases:
///
/// 1. **Move** — every alien that can still move takes one move.  An alien
///    whose city has no roads is marked trapped (`AlienTrapped`); otherwise
///    it walks a uniformly chosen road.  The map is not modified in this
///    phase, so every alien chooses among its city's roads as they were at
///    the start of the step.
/// 2. **Fight** — every city holding two or more aliens is removed along
///    with those aliens (`CityDestroyed`).  Roads into removed cities are
///    then dropped from the survivors, and each city left without roads is
///    reported once (`CityHasNoNeighbors`).  The drop has to finish before
///    the no-roads check, or cities would be judged on stale roads.
/// 3. **Check** — if no alien can move any more, the world terminates: the
///    event channel is closed and every later `step` returns `false`.
///
/// Create via [`World::new`] or [`WorldBuilder`][crate::WorldBuilder].
pub struct World {
    state: Mutex<WorldState>,
}

struct WorldState {
    map:        WorldMap,
    aliens:     Vec<Alien>,
    events:     Option<EventSender>,
    rng:        Box<dyn RandIndex>,
    /// Number used for the next spawned alien's name.
    next_alien: u64,
    steps:      u64,
    terminated: bool,
}

impl World {
    /// A world on `map`, reporting to `events` if given, with an unseeded
    /// random source.
    pub fn new(map: WorldMap, events: Option<EventSender>) -> Self {
        Self::with_rng(map, events, Box::new(SimRng::from_entropy()))
    }

    pub(crate) fn with_rng(
        map:    WorldMap,
        events: Option<EventSender>,
        rng:    Box<dyn RandIndex>,
    ) -> Self {
        Self {
            state: Mutex::new(WorldState {
                map,
                aliens: Vec::new(),
                events,
                rng,
                next_alien: 1,
                steps: 0,
                terminated: false,
            }),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Drop `count` new aliens into uniformly chosen cities.
    ///
    /// May be called any number of times before or between steps; names keep
    /// counting up (`A1`, `A2`, …) so they stay unique.  On an empty map
    /// nothing is spawned.
    pub fn spawn(&self, count: usize) {
        self.lock().spawn(count);
    }

    /// Run one iteration.  Returns `false` once the world has terminated,
    /// and on every call after that.
    pub fn step(&self) -> bool {
        self.lock().step()
    }

    /// Step until the world terminates.  Returns the number of steps run by
    /// this call.
    pub fn run_to_end(&self) -> u64 {
        let before = self.steps();
        while self.step() {}
        self.steps() - before
    }

    /// Copy of the current map.
    pub fn snapshot(&self) -> WorldMap {
        self.lock().map.clone()
    }

    /// Copy of the living aliens, in spawn order.
    pub fn aliens(&self) -> Vec<Alien> {
        self.lock().aliens.clone()
    }

    pub fn is_terminated(&self) -> bool {
        self.lock().terminated
    }

    /// Total steps run so far, including the terminating one.
    pub fn steps(&self) -> u64 {
        self.lock().steps
    }

    // The state is consistent between public calls, so a panic in another
    // caller cannot leave it torn.
    fn lock(&self) -> MutexGuard<'_, WorldState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Step phases ───────────────────────────────────────────────────────────────

impl WorldState {
    fn spawn(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let cities: Vec<String> = self.map.names().map(str::to_owned).collect();
        if cities.is_empty() {
            warn!(count, "no cities to spawn aliens in");
            return;
        }
        for _ in 0..count {
            let city = &cities[self.rng.rand_index(cities.len())];
            let name = format!("A{}", self.next_alien);
            self.next_alien += 1;
            self.aliens.push(Alien::new(name, city.as_str()));
        }
        debug!(count, total = self.aliens.len(), "spawned aliens");
    }

    fn step(&mut self) -> bool {
        if self.terminated {
            return false;
        }
        self.steps += 1;

        self.move_aliens();
        self.fight();

        if self.aliens.iter().any(Alien::can_move) {
            return true;
        }
        self.terminated = true;
        // Dropping the only sender closes the channel.
        self.events = None;
        debug!(
            steps = self.steps,
            aliens = self.aliens.len(),
            cities = self.map.len(),
            "world terminated",
        );
        false
    }

    fn move_aliens(&mut self) {
        let WorldState { map, aliens, events, rng, .. } = self;

        for alien in aliens.iter_mut().filter(|a| a.can_move()) {
            alien.move_count += 1;
            let Some(city) = map.city(&alien.city) else {
                continue;
            };
            let directions = city.directions();
            if directions.is_empty() {
                alien.trapped = true;
                emit(events, Event::AlienTrapped { city: city.clone(), alien: alien.clone() });
                continue;
            }
            let chosen = directions[rng.rand_index(directions.len())];
            if let Some(next) = city.neighbor(chosen) {
                alien.city = next.to_owned();
            }
        }
    }

    fn fight(&mut self) {
        let mut occupants: BTreeMap<&str, Vec<&Alien>> = BTreeMap::new();
        for alien in &self.aliens {
            occupants.entry(alien.city.as_str()).or_default().push(alien);
        }

        let mut destroyed = BTreeSet::new();
        for (name, fighters) in occupants {
            if fighters.len() < 2 {
                continue;
            }
            let Some(city) = self.map.remove(name) else {
                continue;
            };
            debug!(city = name, aliens = fighters.len(), "city destroyed");
            let aliens = fighters.into_iter().cloned().collect();
            emit(&self.events, Event::CityDestroyed { city, aliens });
            destroyed.insert(name.to_owned());
        }
        self.aliens.retain(|a| !destroyed.contains(&a.city));

        self.map.drop_dangling_roads();
        for city in self.map.cities_mut() {
            if city.is_isolated() && !city.has_no_neighbors {
                city.has_no_neighbors = true;
                emit(&self.events, Event::CityHasNoNeighbors { city: city.clone() });
            }
        }
    }
}

fn emit(events: &Option<EventSender>, event: Event) {
    if let Some(tx) = events {
        tx.send(event);
    }
}
