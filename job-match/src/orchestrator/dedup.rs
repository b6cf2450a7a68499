//! First-occurrence-wins deduplication by listing identifier.
//!
//! The same comment is routinely returned for several keywords. Only the
//! first occurrence, in keyword order and then source order, is ever scored;
//! later copies are dropped silently.

use std::collections::HashSet;

/// Set of identifiers already handed to the aggregator during one run.
#[derive(Debug, Default)]
pub struct SeenIds {
    seen: HashSet<String>,
}

impl SeenIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`, returning `true` only the first time it is offered.
    pub fn first_sighting(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_owned())
    }

    /// Number of distinct identifiers recorded.
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}
