//! Graph completion: make every road two-way before the simulation starts.
//!
//! A map definition only has to mention a road once.  Completion:
//!
//! 1. For every road `A --d--> B`, sets `B --reverse(d)--> A`, overwriting
//!    whatever `B` had on that side.  If `B` was never defined it is created
//!    with that single road, and queued so it is visited like any other city.
//! 2. Drops roads left one-way by conflicting input (two cities claiming the
//!    same side of a third: only the last writer keeps the back-road).
//! 3. Rejects a map with no cities.
//!
//! After a successful call, `map.one_way_roads()` is empty.

use std::collections::VecDeque;

use tracing::warn;

use crate::{City, MapError, MapResult, WorldMap};

/// Complete `map` in place.
pub fn complete_map(map: &mut WorldMap) -> MapResult<()> {
    let mut queue: VecDeque<String> = map.names().map(str::to_owned).collect();

    while let Some(name) = queue.pop_front() {
        // Read the city's roads as they are now, not as they were parsed:
        // an earlier city may already have overwritten one of them.
        let roads: Vec<_> = match map.city(&name) {
            Some(city) => city.neighbors.iter().map(|(&d, n)| (d, n.clone())).collect(),
            None => continue,
        };

        for (direction, neighbor) in roads {
            let back = direction.reverse();
            match map.city_mut(&neighbor) {
                Some(city) => {
                    city.set_neighbor(back, name.as_str());
                }
                None => {
                    map.insert(City::new(neighbor.as_str()).with_neighbor(back, name.as_str()));
                    queue.push_back(neighbor);
                }
            }
        }
    }

    for (from, direction, to) in map.one_way_roads() {
        warn!(%from, %direction, %to, "dropping conflicting one-way road");
        if let Some(city) = map.city_mut(&from) {
            city.neighbors.remove(&direction);
        }
    }

    if map.is_empty() {
        return Err(MapError::EmptyMap);
    }
    Ok(())
}
