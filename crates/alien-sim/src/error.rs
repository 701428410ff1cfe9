//! Simulation-subsystem error type.

use alien_map::MapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot build a world on an empty map")]
    EmptyMap,

    #[error("map error: {0}")]
    Map(#[from] MapError),
}

pub type SimResult<T> = Result<T, SimError>;
