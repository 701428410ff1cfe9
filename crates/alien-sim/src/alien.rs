//! Per-alien state.

/// Upper bound on moves per alien.  An alien that has made this many moves
/// stops moving, which bounds every run to `MAX_ALIEN_MOVES × alien_count`
/// move evaluations.
pub const MAX_ALIEN_MOVES: u32 = 10_000;

/// A mad alien wandering the map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alien {
    /// Unique within a world (`A1`, `A2`, …).
    pub name: String,

    /// Name of the city the alien is in.
    pub city: String,

    /// Moves attempted so far, including the one that found the alien
    /// trapped.  Never exceeds [`MAX_ALIEN_MOVES`].
    pub move_count: u32,

    /// Set when the alien's city had no roads left.  Permanent.
    pub trapped: bool,
}

impl Alien {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            city:       city.into(),
            move_count: 0,
            trapped:    false,
        }
    }

    /// `true` while the alien is neither trapped nor out of moves.
    #[inline]
    pub fn can_move(&self) -> bool {
        self.move_count < MAX_ALIEN_MOVES && !self.trapped
    }
}
