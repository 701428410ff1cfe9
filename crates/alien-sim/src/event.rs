//! Events emitted by [`World::step`][crate::World::step].

use std::fmt;

use alien_map::City;

use crate::Alien;

/// Something noteworthy that happened during a step.
///
/// Each event carries snapshots taken when it was emitted: later changes to
/// the world do not show through.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// An alien tried to move but its city had no roads left.
    AlienTrapped { city: City, alien: Alien },

    /// Two or more aliens met in `city`, fought, and took the city with them.
    /// `city` is the city as it was just before removal.
    CityDestroyed { city: City, aliens: Vec<Alien> },

    /// `city` lost its last road.  Reported at most once per city.
    CityHasNoNeighbors { city: City },
}

impl Event {
    /// The city the event is about.
    pub fn city(&self) -> &City {
        match self {
            Event::AlienTrapped { city, .. }
            | Event::CityDestroyed { city, .. }
            | Event::CityHasNoNeighbors { city } => city,
        }
    }

    /// Aliens involved, if any.
    pub fn aliens(&self) -> &[Alien] {
        match self {
            Event::AlienTrapped { alien, .. } => std::slice::from_ref(alien),
            Event::CityDestroyed { aliens, .. } => aliens,
            Event::CityHasNoNeighbors { .. } => &[],
        }
    }

    /// Stable lowercase tag, for machine-readable logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::AlienTrapped { .. }       => "alien_trapped",
            Event::CityDestroyed { .. }      => "city_destroyed",
            Event::CityHasNoNeighbors { .. } => "city_has_no_neighbors",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::AlienTrapped { city, alien } => {
                write!(f, "alien {:?} has trapped in city {:?}", alien.name, city.name)
            }
            Event::CityDestroyed { city, aliens } => {
                write!(f, "{:?} has been destroyed by some mad aliens: \n\t[", city.name)?;
                for (i, alien) in aliens.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(&alien.name)?;
                }
                f.write_str("]")
            }
            Event::CityHasNoNeighbors { city } => {
                write!(f, "city {:?} left with no neighbors", city.name)
            }
        }
    }
}
