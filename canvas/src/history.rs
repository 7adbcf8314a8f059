//! Bounded linear undo/redo over full-surface snapshots.
//!
//! One snapshot is recorded per completed gesture, not per dab. Recording
//! after an undo discards the redo tail; once the capacity is exceeded the
//! oldest snapshot is evicted, so at most `capacity - 1` undos are available.
//!
//! Snapshots are whole copies of the stroke layer. Storing dirty-rect diffs
//! would cut memory substantially; see the design notes.
//!
//! Each entry also remembers the painted bounds at capture time. Restoring an
//! entry merges those bounds into the live ones, so undoing a clear makes the
//! restored paint exportable again while bounds still never shrink.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::bounds::Bounds;
use crate::surface::{Snapshot, Surface};

#[derive(Debug, Clone)]
struct Entry {
    pixels: Snapshot,
    bounds: Bounds,
}

/// Snapshot list plus a cursor to the entry matching the current surface.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Entry>,
    index: usize,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` snapshots (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), index: 0, capacity }
    }

    /// Record the current surface and bounds as the newest entry.
    pub fn snapshot(&mut self, surface: &Surface, bounds: &Bounds) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push_back(Entry { pixels: surface.snapshot(), bounds: *bounds });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            tracing::debug!(
                capacity = self.capacity(),
                retained_bytes = self.memory_bytes(),
                "evicted oldest history snapshot"
            );
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry, restoring it into `surface`. Returns `false` at the oldest entry.
    pub fn undo(&mut self, surface: &mut Surface, bounds: &mut Bounds) -> bool {
        if !self.can_undo() || !self.restore(self.index - 1, surface, bounds) {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry, restoring it into `surface`. Returns `false` at the newest entry.
    pub fn redo(&mut self, surface: &mut Surface, bounds: &mut Bounds) -> bool {
        if !self.can_redo() || !self.restore(self.index + 1, surface, bounds) {
            return false;
        }
        self.index += 1;
        true
    }

    fn restore(&self, at: usize, surface: &mut Surface, bounds: &mut Bounds) -> bool {
        let Some(entry) = self.entries.get(at) else {
            return false;
        };
        if !surface.restore(&entry.pixels) {
            return false;
        }
        bounds.union(&entry.bounds);
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.index + 1 < self.entries.len()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the entry matching the current surface.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total bytes held by all snapshots.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.pixels.memory_bytes()).sum()
    }
}
