//! Map-subsystem error type.

use thiserror::Error;

/// Errors produced while loading or completing a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error(
        "city definition is invalid at line {line}: missing city, neighbor or \
         direction in a pair"
    )]
    CityDefinition { line: usize },

    #[error("invalid direction {token:?} found at line {line}")]
    InvalidDirection { line: usize, token: String },

    #[error("map must contain at least one city")]
    EmptyMap,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
