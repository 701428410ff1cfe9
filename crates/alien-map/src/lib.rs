//! `alien-map` — the world map and its text format.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`city`]     | `City` — name, roads by direction, no-neighbors flag       |
//! | [`map`]      | `WorldMap` — name-keyed city table                         |
//! | [`parse`]    | `load_map`, `parse_map`, `parse_map_reader`                |
//! | [`print`]    | `print_map`, `map_to_string`                               |
//! | [`complete`] | `complete_map` — two-way road completion                   |
//! | [`error`]    | `MapError`, `MapResult<T>`                                 |
//!
//! # Typical use
//!
//! ```
//! use alien_map::{complete_map, map_to_string, parse_map};
//!
//! let mut map = parse_map("Foo north=Bar\n").unwrap();
//! complete_map(&mut map).unwrap();
//! assert_eq!(map_to_string(&map), "Bar south=Foo\nFoo north=Bar\n");
//! ```

pub mod city;
pub mod complete;
pub mod error;
pub mod map;
pub mod parse;
pub mod print;


pub use city::City;
pub use complete::complete_map;
pub use error::{MapError, MapResult};
pub use map::WorldMap;
pub use parse::{load_map, parse_map, parse_map_reader};
pub use print::{map_to_string, print_map};
