//! Plain data row written by the CSV backend.

use serde::Serialize;

use alien_sim::Event;

/// One event, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    /// 1-based position in the event stream.
    pub seq:    u64,
    pub kind:   &'static str,
    pub city:   String,
    /// Space-separated alien names; empty for `city_has_no_neighbors`.
    pub aliens: String,
}

impl EventRow {
    pub const HEADERS: [&'static str; 4] = ["seq", "kind", "city", "aliens"];

    pub fn new(seq: u64, event: &Event) -> Self {
        let aliens: Vec<&str> = event.aliens().iter().map(|a| a.name.as_str()).collect();
        Self {
            seq,
            kind:   event.kind(),
            city:   event.city().name.clone(),
            aliens: aliens.join(" "),
        }
    }
}
