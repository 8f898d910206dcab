//! The ordered list of PDFs waiting to be merged.
//!
//! The queue keeps entries exactly in insertion order. It never sorts,
//! deduplicates or validates; the only mutations are append, remove by
//! index, and clear.

use std::path::{Path, PathBuf};

/// Ordered sequence of PDF paths shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeQueue {
    entries: Vec<PathBuf>,
}

impl MergeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the queue.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(path.into());
    }

    /// Remove the entry at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    /// Entries in merge order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Iterate entries in merge order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

/// Enabled state of the queue's action controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    /// "Merge PDFs" is clickable.
    pub merge_enabled: bool,
    /// "Remove PDF" is clickable.
    pub remove_enabled: bool,
}

/// Derive control state from the queue length alone.
///
/// Merging needs at least two entries, removing needs at least one.
pub fn derive_button_states(queue_len: usize) -> ButtonStates {
    ButtonStates {
        merge_enabled: queue_len >= 2,
        remove_enabled: queue_len >= 1,
    }
}
