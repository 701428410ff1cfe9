//! The world map: a name-keyed table of cities.

use std::collections::{BTreeMap, BTreeSet};

use alien_core::Direction;

use crate::City;

/// All cities of the world, keyed by name.
///
/// Backed by a `BTreeMap` so every walk over the map (completion, collision
/// resolution, printing) visits cities in name order.  With a scripted
/// [`RandIndex`][alien_core::RandIndex] this makes a whole run repeatable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldMap {
    cities: BTreeMap<String, City>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Size ──────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    #[inline]
    pub fn city_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// City names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cities.keys().map(String::as_str)
    }

    /// Cities in name order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.values()
    }

    pub fn cities_mut(&mut self) -> impl Iterator<Item = &mut City> + '_ {
        self.cities.values_mut()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `city`, replacing any existing city with the same name.
    /// Returns the replaced city.
    pub fn insert(&mut self, city: City) -> Option<City> {
        self.cities.insert(city.name.clone(), city)
    }

    /// Remove a city.  Roads pointing at it from other cities are left
    /// dangling; call [`drop_dangling_roads`](Self::drop_dangling_roads)
    /// once all removals for the current pass are done.
    pub fn remove(&mut self, name: &str) -> Option<City> {
        self.cities.remove(name)
    }

    /// Drop every road whose target city no longer exists.
    ///
    /// Returns the number of roads dropped.
    pub fn drop_dangling_roads(&mut self) -> usize {
        let alive: BTreeSet<String> = self.cities.keys().cloned().collect();
        let mut dropped = 0;
        for city in self.cities.values_mut() {
            let before = city.neighbors.len();
            city.neighbors.retain(|_, neighbor| alive.contains(neighbor));
            dropped += before - city.neighbors.len();
        }
        dropped
    }

    // ── Invariant checks ──────────────────────────────────────────────────

    /// Roads `(from, direction, to)` that are not mirrored by a road
    /// `(to, direction.reverse(), from)`, including roads to missing cities.
    ///
    /// Empty for any completed, undamaged map.
    pub fn one_way_roads(&self) -> Vec<(String, Direction, String)> {
        let mut out = Vec::new();
        for city in self.cities.values() {
            for (&direction, neighbor) in &city.neighbors {
                let mirrored = self
                    .city(neighbor)
                    .and_then(|n| n.neighbor(direction.reverse()))
                    .is_some_and(|back| back == city.name);
                if !mirrored {
                    out.push((city.name.clone(), direction, neighbor.clone()));
                }
            }
        }
        out
    }
}

impl FromIterator<City> for WorldMap {
    /// Later cities overwrite earlier ones with the same name.
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        let mut map = WorldMap::new();
        for city in iter {
            map.insert(city);
        }
        map
    }
}
