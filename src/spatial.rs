//! Pure spatial helpers: grid snapping and alignment detection.

use crate::element::{Element, Position};
use crate::error::EditorError;

/// Elements within this many pixels of each other on an axis are considered
/// aligned on that axis (used for advisory alignment guides only).
pub const ALIGNMENT_THRESHOLD: i32 = 5;

/// Round each axis of `position` independently to the nearest multiple of
/// `grid_size`. Idempotent: snapping an already snapped position is a no-op.
pub fn snap_to_grid(position: Position, grid_size: i32) -> Result<Position, EditorError> {
    if grid_size <= 0 {
        return Err(EditorError::InvalidGridSize(grid_size));
    }
    let snap_axis = |v: i32| (f64::from(v) / f64::from(grid_size)).round() as i32 * grid_size;
    Ok(Position::new(snap_axis(position.x), snap_axis(position.y)))
}

/// Advisory alignment report between two elements' positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// The elements share a horizontal line (small vertical gap).
    pub horizontal: bool,
    /// The elements share a vertical line (small horizontal gap).
    pub vertical: bool,
    pub horizontal_distance: i32,
    pub vertical_distance: i32,
}

/// Compute absolute pixel deltas between two elements' positions and flag
/// near-alignment on each axis. Never enforced, only reported.
pub fn check_alignment(a: &Element, b: &Element) -> Alignment {
    let horizontal_distance = (a.position.x - b.position.x).abs();
    let vertical_distance = (a.position.y - b.position.y).abs();
    Alignment {
        horizontal: vertical_distance < ALIGNMENT_THRESHOLD,
        vertical: horizontal_distance < ALIGNMENT_THRESHOLD,
        horizontal_distance,
        vertical_distance,
    }
}
