//! Random-index providers.
//!
//! The simulation only ever needs one kind of randomness: "pick one of `len`
//! things uniformly".  It asks for it through the [`RandIndex`] trait so the
//! source can be swapped:
//!
//! - [`SimRng`] — a `SmallRng`, seeded explicitly or from OS entropy.
//! - [`ScriptedIndex`] — replays a fixed sequence of indices, for tests that
//!   need an exact, repeatable run.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandIndex: Send {
    /// Return an index in `[0, len)`.  Returns `0` when `len <= 1`.
    fn rand_index(&mut self, len: usize) -> usize;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Owned by the world and only used while its lock is held, so there is a
/// single stream per run: the same seed and the same call sequence always
/// produce the same indices.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }
}

impl RandIndex for SimRng {
    #[inline]
    fn rand_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.0.gen_range(0..len)
    }
}

// ── ScriptedIndex ─────────────────────────────────────────────────────────────

/// Replays a fixed list of indices in order, wrapping around at the end.
///
/// Each scripted value is reduced modulo `len`, so a script written for a
/// larger choice set still yields an in-range index.  Calls with `len <= 1`
/// do not consume the script.  An empty script always returns `0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIndex {
    script: VecDeque<usize>,
}

impl ScriptedIndex {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self { script: script.into_iter().collect() }
    }

    /// A script that always picks the first option.
    pub fn first() -> Self {
        Self::default()
    }
}

impl RandIndex for ScriptedIndex {
    fn rand_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        match self.script.pop_front() {
            None => 0,
            Some(next) => {
                self.script.push_back(next);
                next % len
            }
        }
    }
}

impl<R: RandIndex + ?Sized> RandIndex for Box<R> {
    #[inline]
    fn rand_index(&mut self, len: usize) -> usize {
        (**self).rand_index(len)
    }
}
