//! Deterministic map printer.
//!
//! Output is the loader's own format: cities in lexicographic name order,
//! and within a city the roads sorted by the *canonical name string* of
//! their direction (`East`, `North`, `South`, `West`) rather than
//! canonical direction order, with the direction written in lowercase:
//!
//! ```text
//! Foo north=Bar south=Qu-ux west=Baz
//! ```

use std::io::{self, Write};

use crate::{City, WorldMap};

/// Write `map` to `w`.
pub fn print_map<W: Write>(w: &mut W, map: &WorldMap) -> io::Result<()> {
    for city in map.cities() {
        w.write_all(city_line(city).as_bytes())?;
    }
    w.flush()
}

/// Render `map` into a `String`.
pub fn map_to_string(map: &WorldMap) -> String {
    map.cities().map(city_line).collect()
}

/// One city's definition line, newline included.
fn city_line(city: &City) -> String {
    let mut roads: Vec<_> = city.neighbors.iter().collect();
    roads.sort_by_key(|(direction, _)| direction.name());

    let mut line = city.name.clone();
    for (direction, neighbor) in roads {
        line.push(' ');
        line.push_str(&direction.name().to_lowercase());
        line.push('=');
        line.push_str(neighbor);
    }
    line.push('\n');
    line
}
