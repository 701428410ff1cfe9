//! A single city and its outgoing roads.

use std::collections::BTreeMap;

use alien_core::Direction;

/// A city on the world map.
///
/// Roads are stored as neighbor *names*, not references: a neighbor is
/// resolved through the owning [`WorldMap`][crate::WorldMap] at lookup time,
/// so removing a city never invalidates another city's record.  It only
/// leaves a dangling name that can be detected and dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Unique, non-empty name.
    pub name: String,

    /// Neighbor reached by walking `direction` from this city.  At most one
    /// neighbor per direction; iteration is in canonical direction order.
    pub neighbors: BTreeMap<Direction, String>,

    /// Set once the city has been reported as having no neighbors left, so
    /// the report is never repeated.
    pub has_no_neighbors: bool,
}

impl City {
    /// A city with no roads.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:             name.into(),
            neighbors:        BTreeMap::new(),
            has_no_neighbors: false,
        }
    }

    /// Builder-style road insertion, mainly for tests and hand-built maps.
    pub fn with_neighbor(mut self, direction: Direction, neighbor: impl Into<String>) -> Self {
        self.neighbors.insert(direction, neighbor.into());
        self
    }

    /// Neighbor in `direction`, if there is a road that way.
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<&str> {
        self.neighbors.get(&direction).map(String::as_str)
    }

    /// Set (or overwrite) the road in `direction`.  Returns the previous
    /// neighbor in that direction.
    pub fn set_neighbor(&mut self, direction: Direction, neighbor: impl Into<String>) -> Option<String> {
        self.neighbors.insert(direction, neighbor.into())
    }

    /// Directions that currently have a road, in canonical order.
    pub fn directions(&self) -> Vec<Direction> {
        self.neighbors.keys().copied().collect()
    }

    /// `true` if no road leaves this city.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.neighbors.is_empty()
    }
}
