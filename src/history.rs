use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::selection::Selection;
use crate::util::time;

/// An immutable snapshot of the document and selection at one point in time.
/// Entries are opaque mementos; they are never diffed against neighbors and
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub document: Document,
    pub selection: Selection,
    pub timestamp: u64,
}

/// Linear undo/redo log of whole-state snapshots.
///
/// The cursor always points at the entry representing "now"; entries past the
/// cursor are redo-able and are discarded the moment a new snapshot is
/// committed from a non-tip position. The log is seeded with one entry for
/// the empty document so undo never underflows to "no state".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Create a history seeded with a single entry for the given state.
    pub fn new(document: &Document, selection: &Selection) -> Self {
        Self {
            entries: vec![snapshot(document, selection)],
            cursor: 0,
        }
    }

    /// Record the state produced by a committed mutation. Truncates any
    /// redo-able future first; every committed event is its own entry, with
    /// no coalescing of rapid successive edits.
    pub fn commit(&mut self, document: &Document, selection: &Selection) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot(document, selection));
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back one entry, returning the state to restore.
    /// `None` when already at the initial entry.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step the cursor forward one entry, returning the state to restore.
    /// `None` when already at the tip.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(&Document::new(), &Selection::new())
    }
}

fn snapshot(document: &Document, selection: &Selection) -> HistoryEntry {
    HistoryEntry {
        document: document.clone(),
        selection: selection.clone(),
        timestamp: time::epoch_secs(),
    }
}
