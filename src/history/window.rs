//! Bounded window of recent grids for cycle detection.
//!
//! Each tick the state *entering* the tick is compared against the states
//! recorded on earlier ticks, then recorded itself. With a capacity of 11
//! this catches still lifes (on the second tick) and oscillators of period
//! up to 11 (on tick `period + 1`). Longer cycles go unnoticed.

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::grid::Grid;

/// Number of states retained: the current one plus the 10 before it.
pub const HISTORY_CAPACITY: usize = 11;

#[derive(Clone, Debug)]
struct Entry {
    fingerprint: u64,
    grid: Grid,
}

/// FIFO of past grids, oldest first.
#[derive(Clone, Debug)]
pub struct HistoryWindow {
    entries: VecDeque<Entry>,
    capacity: usize,
}

impl HistoryWindow {
    /// Create an empty window with the standard capacity.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create an empty window holding at most `capacity` grids.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be positive");
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Check `state` against every retained grid, then record it.
    ///
    /// Returns `true` if `state` matched a previously recorded grid. The
    /// state is recorded either way, evicting the oldest entry once the
    /// window is full.
    pub fn record_and_check_stable(&mut self, state: &Grid) -> bool {
        let fingerprint = fingerprint(state);
        let stable = self.contains_fingerprinted(fingerprint, state);

        self.entries.push_back(Entry {
            fingerprint,
            grid: state.clone(),
        });
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }

        stable
    }

    /// Whether `state` exactly equals a retained grid.
    #[must_use]
    pub fn contains(&self, state: &Grid) -> bool {
        self.contains_fingerprinted(fingerprint(state), state)
    }

    fn contains_fingerprinted(&self, fingerprint: u64, state: &Grid) -> bool {
        self.entries
            .iter()
            .any(|e| e.fingerprint == fingerprint && e.grid == *state)
    }

    /// Number of retained grids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained grids.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every retained grid.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Retained grids, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Grid> {
        self.entries.iter().map(|e| &e.grid)
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::new()
    }
}

fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = FxHasher::default();
    grid.hash(&mut hasher);
    hasher.finish()
}
