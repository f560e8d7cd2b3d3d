//! Inbound event types for the editor boundary.
//!
//! The drag plumbing (pointer tracking, hit testing) lives in the view
//! layer; by the time an event reaches the engine it has been reduced to a
//! final displacement and a drop-target identifier.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{ElementType, SectionType};
use crate::error::EditorError;

/// Drop-target identifier for the canvas surface.
pub const CANVAS_DROP_TARGET: &str = "canvas";

/// Reserved id prefix marking a palette drag that creates a new element.
pub const NEW_ELEMENT_PREFIX: &str = "new-";

/// Reserved id prefix marking a palette drag that instantiates a section.
pub const NEW_SECTION_PREFIX: &str = "section-";

/// Final drag displacement in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// A completed drag gesture, as delivered by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    /// Dragged id; the reserved prefixes distinguish palette drags from
    /// repositioning of existing elements.
    pub dragged_id: String,
    /// Identifier of the surface the pointer was released over, if any.
    pub over_target: Option<String>,
    pub delta: Delta,
}

impl DragEndEvent {
    pub fn is_over_canvas(&self) -> bool {
        self.over_target.as_deref() == Some(CANVAS_DROP_TARGET)
    }

    /// Decode the dragged id per the prefix contract.
    pub fn payload(&self) -> Result<DragPayload, EditorError> {
        if let Some(name) = self.dragged_id.strip_prefix(NEW_ELEMENT_PREFIX) {
            return Ok(DragPayload::NewElement(ElementType::from_str(name)?));
        }
        if let Some(name) = self.dragged_id.strip_prefix(NEW_SECTION_PREFIX) {
            return Ok(DragPayload::NewSection(SectionType::from_str(name)?));
        }
        if self.dragged_id.is_empty() {
            return Err(EditorError::MalformedDragPayload(self.dragged_id.clone()));
        }
        Ok(DragPayload::Existing(self.dragged_id.clone()))
    }
}

/// Decoded meaning of a drag-end event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// New element from the palette.
    NewElement(ElementType),
    /// New section from the palette.
    NewSection(SectionType),
    /// An existing element being repositioned (moves the whole selection).
    Existing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str) -> DragEndEvent {
        DragEndEvent {
            dragged_id: id.to_owned(),
            over_target: Some(CANVAS_DROP_TARGET.to_owned()),
            delta: Delta::new(0, 0),
        }
    }

    #[test]
    fn decodes_reserved_prefixes() {
        assert_eq!(
            event("new-button").payload(),
            Ok(DragPayload::NewElement(ElementType::Button))
        );
        assert_eq!(
            event("section-hero").payload(),
            Ok(DragPayload::NewSection(SectionType::Hero))
        );
        assert_eq!(
            event("element-42").payload(),
            Ok(DragPayload::Existing("element-42".to_owned()))
        );
    }

    #[test]
    fn rejects_unknown_names_and_empty_ids() {
        assert_eq!(
            event("new-sparkle").payload(),
            Err(EditorError::UnknownElementType("sparkle".to_owned()))
        );
        assert_eq!(
            event("section-footer").payload(),
            Err(EditorError::UnknownSectionType("footer".to_owned()))
        );
        assert!(matches!(
            event("").payload(),
            Err(EditorError::MalformedDragPayload(_))
        ));
    }
}
