//! Map text loader.
//!
//! # Format
//!
//! One city per line: the city name followed by `direction=neighbor` pairs.
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! Lonely
//! ```
//!
//! A token is a maximal run of ASCII letters, digits, `-` and `_`; anything
//! else separates tokens.  `=` is therefore just a separator, and the loader
//! does not check which separator binds a pair.
//!
//! | Line shape                   | Result                                   |
//! |------------------------------|------------------------------------------|
//! | no tokens                    | skipped                                  |
//! | one token                    | city with no roads                       |
//! | even token count             | [`MapError::CityDefinition`]             |
//! | unknown direction token      | [`MapError::InvalidDirection`]           |
//!
//! A city defined twice keeps its last definition, and a direction repeated
//! on one line keeps its last neighbor.  Loading stops at the first error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use alien_core::Direction;

use crate::{City, MapError, MapResult, WorldMap};

/// Load a map from a file.
pub fn load_map(path: &Path) -> MapResult<WorldMap> {
    let file = File::open(path)?;
    parse_map_reader(BufReader::new(file))
}

/// Parse a map from an in-memory definition.
pub fn parse_map(definition: &str) -> MapResult<WorldMap> {
    parse_map_reader(definition.as_bytes())
}

/// Parse a map from any buffered reader.
pub fn parse_map_reader<R: BufRead>(reader: R) -> MapResult<WorldMap> {
    let mut map = WorldMap::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(city) = parse_line(&line, i + 1)? {
            map.insert(city);
        }
    }
    Ok(map)
}

/// Parse one definition line.  `line_number` is 1-based and only used for
/// error reporting.
fn parse_line(line: &str, line_number: usize) -> MapResult<Option<City>> {
    let words = tokenize(line);
    let Some((name, pairs)) = words.split_first() else {
        return Ok(None);
    };
    if words.len() % 2 == 0 {
        return Err(MapError::CityDefinition { line: line_number });
    }

    let mut city = City::new(*name);
    for pair in pairs.chunks_exact(2) {
        let (token, neighbor) = (pair[0], pair[1]);
        let direction = Direction::parse(token).ok_or_else(|| MapError::InvalidDirection {
            line:  line_number,
            token: token.to_owned(),
        })?;
        city.set_neighbor(direction, neighbor);
    }
    Ok(Some(city))
}

#[inline]
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| !is_token_char(c))
        .filter(|w| !w.is_empty())
        .collect()
}
