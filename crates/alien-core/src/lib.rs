//! `alien-core` — foundational types for the `rust_aliens` simulation.
//!
//! Every other `alien-*` crate depends on this one.  It has no `alien-*`
//! dependencies and minimal external ones (`rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`direction`]   | `Direction`, reverse lookup, case-insensitive parsing |
//! | [`rng`]         | `RandIndex` trait, `SimRng`, `ScriptedIndex`          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, UnknownDirection};
pub use rng::{RandIndex, ScriptedIndex, SimRng};
