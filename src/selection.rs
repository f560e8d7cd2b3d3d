use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// The set of currently selected element ids.
///
/// A pure view over the document: holding an id here never affects the
/// element's lifetime. The editor controller is responsible for pruning
/// dangling ids whenever elements are removed, so every id in a committed
/// selection references an element present in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection with a single id.
    pub fn select_single(&mut self, id: impl Into<String>) {
        self.ids.clear();
        self.ids.insert(id.into());
    }

    /// Multi-select gesture: remove the id if present, add it if absent.
    ///
    /// Unconditional by design; the lock guard lives in the controller so
    /// this primitive can be exercised directly.
    pub fn toggle(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Drop every id that no longer references an element in the document.
    pub fn retain_present(&mut self, document: &Document) {
        self.ids.retain(|id| document.contains(id));
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }
}

impl FromIterator<String> for Selection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
