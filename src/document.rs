use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::element::Element;
use crate::error::EditorError;
use crate::input::Delta;
use crate::selection::Selection;
use crate::spatial;

/// Direction for a layer-ordering command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerDirection {
    Up,
    Down,
    Top,
    Bottom,
}

/// The mutable collection of placed elements and their ordering.
///
/// Element ids are unique for the document's lifetime; all mutation goes
/// through the editor controller, which commits a history snapshot after
/// each operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.iter().any(|el| el.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn add_elements(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    /// Elements in paint order: ascending z-index, creation order on ties.
    pub fn elements_by_z(&self) -> Vec<&Element> {
        let mut sorted: Vec<&Element> = self.elements.iter().collect();
        sorted.sort_by_key(|el| el.z_index);
        sorted
    }

    /// Move every unlocked element in `ids` by `delta`, snapping to the grid
    /// when `snap` carries a grid size. Locked elements are silently skipped.
    /// Returns how many elements actually moved.
    pub fn move_elements(
        &mut self,
        ids: &Selection,
        delta: Delta,
        snap: Option<i32>,
    ) -> Result<usize, EditorError> {
        let mut moved = 0;
        for element in &mut self.elements {
            if element.is_locked || !ids.contains(&element.id) {
                continue;
            }
            let mut position = element.position.translated(delta);
            if let Some(grid_size) = snap {
                position = spatial::snap_to_grid(position, grid_size)?;
            }
            element.position = position;
            moved += 1;
        }
        Ok(moved)
    }

    /// Merge `patch` into the target element's properties. An absent id is a
    /// benign no-op (UI events race with deletion); returns whether a target
    /// was found.
    pub fn update_properties(&mut self, id: &str, patch: &Map<String, Value>) -> bool {
        match self.find_mut(id) {
            Some(element) => {
                element.merge_properties(patch);
                true
            }
            None => false,
        }
    }

    pub fn set_locked(&mut self, ids: &Selection, locked: bool) -> usize {
        let mut changed = 0;
        for element in &mut self.elements {
            if ids.contains(&element.id) {
                element.is_locked = locked;
                changed += 1;
            }
        }
        changed
    }

    /// Flip each referenced element's own lock flag (the toolbar lock command
    /// toggles per element, so a mixed selection stays mixed).
    pub fn toggle_locked(&mut self, ids: &Selection) -> usize {
        let mut changed = 0;
        for element in &mut self.elements {
            if ids.contains(&element.id) {
                element.is_locked = !element.is_locked;
                changed += 1;
            }
        }
        changed
    }

    pub fn remove_element(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|el| el.id != id);
        self.elements.len() != before
    }

    pub fn remove_elements(&mut self, ids: &Selection) -> usize {
        let before = self.elements.len();
        self.elements.retain(|el| !ids.contains(&el.id));
        before - self.elements.len()
    }

    /// Reassign z-indices to move one element through the layer order.
    ///
    /// `Up`/`Down` are exact pairwise swaps of z values with the neighbor in
    /// the stable z order (ties broken by creation order), never a
    /// reinsertion: repeated operations leapfrog two elements past each other
    /// and leave unrelated ties untouched. Boundary moves are silent no-ops.
    /// Returns whether the element exists.
    pub fn reorder_z(&mut self, id: &str, direction: LayerDirection) -> bool {
        let mut order: Vec<usize> = (0..self.elements.len()).collect();
        order.sort_by_key(|&i| self.elements[i].z_index);

        let Some(pos) = order.iter().position(|&i| self.elements[i].id == id) else {
            return false;
        };

        match direction {
            LayerDirection::Up => {
                if pos + 1 < order.len() {
                    self.swap_z(order[pos], order[pos + 1]);
                }
            }
            LayerDirection::Down => {
                if pos > 0 {
                    self.swap_z(order[pos], order[pos - 1]);
                }
            }
            LayerDirection::Top => {
                let highest = self.elements.iter().map(|el| el.z_index).max().unwrap_or(1);
                self.elements[order[pos]].z_index = highest + 1;
            }
            LayerDirection::Bottom => {
                let lowest = self.elements.iter().map(|el| el.z_index).min().unwrap_or(1);
                self.elements[order[pos]].z_index = lowest - 1;
            }
        }
        true
    }

    fn swap_z(&mut self, a: usize, b: usize) {
        let za = self.elements[a].z_index;
        self.elements[a].z_index = self.elements[b].z_index;
        self.elements[b].z_index = za;
    }
}
