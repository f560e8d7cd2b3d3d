use thiserror::Error;

/// Errors surfaced at the engine's input boundaries.
///
/// Invalid references (an operation targeting an id that is no longer in the
/// document) are deliberately *not* errors; they are benign no-ops because UI
/// events routinely race with deletion. Only genuinely malformed input is
/// rejected here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// An element name that is not part of the closed element-type set.
    #[error("unknown element type: {0:?}")]
    UnknownElementType(String),

    /// A section name that is not part of the closed section-type set.
    /// Never silently falls back to a default template.
    #[error("unknown section type: {0:?}")]
    UnknownSectionType(String),

    /// Grid snapping with a non-positive grid size.
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(i32),

    /// A drag payload id that does not follow the reserved prefix contract.
    #[error("malformed drag payload: {0:?}")]
    MalformedDragPayload(String),
}
