use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::LayerDirection;
use crate::element::{factory, section, Position};
use crate::error::EditorError;
use crate::input::{DragEndEvent, DragPayload};
use crate::spatial;
use crate::state::EditorState;

/// The editor controller: owns one [`EditorState`] and exposes the
/// operation entry points the view layer calls.
///
/// Every entry point follows the same shape: guard (preview mode, locks),
/// apply the document/selection transformation, then commit a history
/// snapshot. Guarded attempts are silently suppressed, not errors; only
/// malformed input (unknown type names, bad grid sizes) returns `Err`, and
/// in that case the state is untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Editor {
    state: EditorState,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    fn commit(&mut self) {
        self.state
            .history
            .commit(&self.state.document, &self.state.selection);
    }

    /// Handle a completed drag gesture.
    ///
    /// The dragged id's reserved prefix decides whether this creates a new
    /// element, instantiates a section, or repositions the current
    /// selection's unlocked members. Drops outside the canvas and drags in
    /// preview mode are suppressed.
    pub fn handle_drag_end(&mut self, event: &DragEndEvent) -> Result<(), EditorError> {
        if self.state.is_preview_mode {
            log::debug!("drag ignored in preview mode");
            return Ok(());
        }
        if !event.is_over_canvas() {
            return Ok(());
        }

        match event.payload()? {
            DragPayload::NewElement(kind) => {
                let mut position = Position::new(event.delta.dx, event.delta.dy);
                if let Some(grid_size) = self.state.snap_grid() {
                    position = spatial::snap_to_grid(position, grid_size)?;
                }
                let element = factory::create_element(kind, position);
                log::info!("created {kind} element {}", element.id);
                self.state.selection.select_single(element.id.clone());
                self.state.document.add_element(element);
                self.commit();
            }
            DragPayload::NewSection(kind) => {
                let elements = section::instantiate_section(kind, event.delta);
                log::info!("instantiated {kind} section with {} elements", elements.len());
                self.state.selection.clear();
                for element in &elements {
                    self.state.selection.insert(element.id.clone());
                }
                self.state.document.add_elements(elements);
                self.commit();
            }
            DragPayload::Existing(_) => {
                let moved = self.state.document.move_elements(
                    &self.state.selection,
                    event.delta,
                    self.state.snap_grid(),
                )?;
                // A drag that moved nothing (all locked, or stale selection)
                // is not a state change and gets no history entry.
                if moved > 0 {
                    self.commit();
                }
            }
        }
        Ok(())
    }

    /// Merge a single property edit into an element. An absent id is a
    /// benign no-op but still commits a distinct history entry, so rapid
    /// edits racing with deletion keep a linear history.
    pub fn update_property(&mut self, id: &str, key: impl Into<String>, value: Value) {
        let mut patch = Map::new();
        patch.insert(key.into(), value);
        self.update_properties(id, &patch);
    }

    /// Merge a property patch into an element; patch keys overwrite, other
    /// keys are untouched. Every committed edit is its own history entry.
    pub fn update_properties(&mut self, id: &str, patch: &Map<String, Value>) {
        if self.state.is_preview_mode {
            return;
        }
        if !self.state.document.update_properties(id, patch) {
            log::debug!("property edit on missing element {id}");
        }
        self.commit();
    }

    /// Move an element through the layer order. A missing id is a benign
    /// no-op; boundary moves still commit, matching the original behavior.
    pub fn reorder_layer(&mut self, id: &str, direction: LayerDirection) {
        if self.state.is_preview_mode {
            return;
        }
        if self.state.document.reorder_z(id, direction) {
            self.commit();
        }
    }

    /// Selection click. Locked elements cannot be *newly* selected, but a
    /// locked element already in the selection can be clicked without losing
    /// it. Selection changes are not document mutations and do not commit.
    pub fn select_element(&mut self, id: &str, multi_select: bool) {
        if self.state.is_preview_mode {
            return;
        }
        let Some(element) = self.state.document.find(id) else {
            return;
        };
        if element.is_locked && !self.state.selection.contains(id) {
            log::debug!("refused selection of locked element {id}");
            return;
        }
        if multi_select {
            self.state.selection.toggle(id);
        } else {
            self.state.selection.select_single(id);
        }
    }

    /// Canvas background click: drop the selection. No history entry.
    pub fn clear_selection(&mut self) {
        if !self.state.is_preview_mode {
            self.state.selection.clear();
        }
    }

    /// Delete every selected element. The selection is pruned in the same
    /// transition, so it never references a missing element.
    pub fn delete_selected(&mut self) {
        if self.state.is_preview_mode || self.state.selection.is_empty() {
            return;
        }
        let removed = self.state.document.remove_elements(&self.state.selection);
        self.state.selection.clear();
        log::info!("deleted {removed} elements");
        self.commit();
    }

    /// Delete one element (layers-panel command), pruning it from the
    /// selection in the same transition.
    pub fn delete_element(&mut self, id: &str) {
        if self.state.is_preview_mode {
            return;
        }
        if self.state.document.remove_element(id) {
            self.state.selection.remove(id);
            self.commit();
        }
    }

    /// Flip the lock flag on each selected element.
    pub fn toggle_lock_selected(&mut self) {
        if self.state.is_preview_mode || self.state.selection.is_empty() {
            return;
        }
        self.state.document.toggle_locked(&self.state.selection);
        self.commit();
    }

    pub fn undo(&mut self) {
        if let Some(entry) = self.state.history.undo() {
            let document = entry.document.clone();
            let selection = entry.selection.clone();
            self.state.document = document;
            self.state.selection = selection;
        }
    }

    pub fn redo(&mut self) {
        if let Some(entry) = self.state.history.redo() {
            let document = entry.document.clone();
            let selection = entry.selection.clone();
            self.state.document = document;
            self.state.selection = selection;
        }
    }

    /// View-only flag; never a history entry.
    pub fn toggle_grid(&mut self) {
        self.state.show_grid = !self.state.show_grid;
    }

    /// View-only flag; never a history entry.
    pub fn toggle_snap(&mut self) {
        self.state.snap_to_grid = !self.state.snap_to_grid;
    }

    /// Flip preview mode and clear the selection: selection is meaningless
    /// in preview. View-only, never a history entry.
    pub fn toggle_preview(&mut self) {
        self.state.is_preview_mode = !self.state.is_preview_mode;
        self.state.selection.clear();
    }

    pub fn set_grid_size(&mut self, grid_size: i32) -> Result<(), EditorError> {
        if grid_size <= 0 {
            return Err(EditorError::InvalidGridSize(grid_size));
        }
        self.state.grid_size = grid_size;
        Ok(())
    }
}
