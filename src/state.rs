use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::history::History;
use crate::selection::Selection;

pub const DEFAULT_GRID_SIZE: i32 = 10;

/// The whole editable-document state: elements, selection, undo history and
/// the view toggles.
///
/// Owned exclusively by the [`Editor`](crate::editor::Editor) controller;
/// nothing outside the controller mutates it. The view toggles are not
/// document mutations and never create history entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorState {
    pub document: Document,
    pub selection: Selection,
    pub history: History,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    pub grid_size: i32,
    pub is_preview_mode: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        let document = Document::new();
        let selection = Selection::new();
        let history = History::new(&document, &selection);
        Self {
            document,
            selection,
            history,
            show_grid: true,
            snap_to_grid: true,
            grid_size: DEFAULT_GRID_SIZE,
            is_preview_mode: false,
        }
    }
}

impl EditorState {
    /// Grid size to snap with, or `None` when snapping is disabled.
    pub fn snap_grid(&self) -> Option<i32> {
        self.snap_to_grid.then_some(self.grid_size)
    }
}
