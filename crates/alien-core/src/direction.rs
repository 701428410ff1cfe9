//! The four compass directions a road can leave a city by.
//!
//! The enum is closed: every `Direction` value is one of the four canonical
//! directions, so [`Direction::reverse`] is total without a fallback arm.
//! Variants are declared in canonical order (North, East, South, West), which
//! makes the derived `Ord` match [`Direction::ALL`]; ordered maps keyed by
//! `Direction` therefore iterate in canonical order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A compass direction, relative to the city a road starts from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing back the way we came.
    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East  => Direction::West,
            Direction::West  => Direction::East,
        }
    }

    /// Canonical capitalized name (`"North"`, `"East"`, …).
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East  => "East",
            Direction::South => "South",
            Direction::West  => "West",
        }
    }

    /// Case-insensitive lookup of a canonical direction name.
    ///
    /// Returns `None` for anything that is not exactly one of the four names
    /// (ignoring case); `"southx"` and `"s"` are both rejected.
    pub fn parse(s: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by `Direction::from_str` for an unknown direction name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s).ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}
