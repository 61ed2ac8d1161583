//! Navigation history
//!
//! Each entry is a [`Location`], payload included. A payload therefore lives
//! exactly as long as the entry created by the navigation that attached it:
//! a new navigation without a payload yields none, and going back to the entry
//! brings it back.

use crate::location::{Location, NavigationPayload};
use crate::{NavigationDirection, RouteChangeEvent};

/// Navigation history stack
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    current: usize,
    /// Maximum number of entries (0 = unlimited)
    max_entries: usize,
}

impl History {
    pub const DEFAULT_MAX_ENTRIES: usize = 1000;

    /// History with a single entry, as on initial load
    pub fn new(initial: Location) -> Self {
        Self::with_max_entries(initial, Self::DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(initial: Location, max_entries: usize) -> Self {
        Self {
            entries: vec![initial],
            current: 0,
            max_entries,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.current]
    }

    pub fn current_path(&self) -> &str {
        self.current().path()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry
    pub fn index(&self) -> usize {
        self.current
    }

    /// Add an entry after the current one, dropping any forward entries
    pub fn push(&mut self, path: &str, payload: Option<NavigationPayload>) -> RouteChangeEvent {
        let from = self.current().href();

        self.entries.truncate(self.current + 1);
        self.entries
            .push(Location::parse(path).with_payload(payload));
        self.current += 1;

        self.enforce_limit();

        self.event(Some(from), NavigationDirection::Forward)
    }

    /// Overwrite the current entry
    pub fn replace(&mut self, path: &str, payload: Option<NavigationPayload>) -> RouteChangeEvent {
        let from = self.current().href();

        self.entries[self.current] = Location::parse(path).with_payload(payload);

        self.event(Some(from), NavigationDirection::Replace)
    }

    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        if !self.can_go_back() {
            return None;
        }
        let from = self.current().href();
        self.current -= 1;
        Some(self.event(Some(from), NavigationDirection::Back))
    }

    pub fn forward(&mut self) -> Option<RouteChangeEvent> {
        if !self.can_go_forward() {
            return None;
        }
        let from = self.current().href();
        self.current += 1;
        Some(self.event(Some(from), NavigationDirection::Forward))
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Drop every payload; paths and position are kept
    ///
    /// Returns how many payloads were discarded.
    pub fn discard_payloads(&mut self) -> usize {
        self.entries
            .iter_mut()
            .filter_map(Location::take_payload)
            .count()
    }

    fn enforce_limit(&mut self) {
        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(0..excess);
            self.current -= excess;
        }
    }

    fn event(&self, from: Option<String>, direction: NavigationDirection) -> RouteChangeEvent {
        RouteChangeEvent {
            from,
            to: self.current().href(),
            direction,
            has_payload: self.current().payload().is_some(),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::default())
    }
}
