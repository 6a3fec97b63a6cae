//! Input model: the shape tool palette, persistent selection state, and the
//! gesture state machine.
//!
//! `ShapeTool` and `UiState` capture the user's intent at the time of a
//! pointer-down. `GestureState` is the active gesture tracked between
//! pointer-down and pointer-up, carrying the anchor needed to recompute draft
//! geometry on every move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::DEFAULT_COLOR;
use crate::geom::Point;

/// Which shape the next drag will draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeTool {
    /// Circle grown from its center (default).
    #[default]
    Circle,
    /// Axis-aligned rectangle.
    Rect,
    /// Straight line segment.
    Line,
}

/// Persistent UI selection state, read when a new draft shape is created.
///
/// Mutated only by explicit control changes; pointer gestures never touch it,
/// and changing it mid-gesture does not restyle the draft already in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Currently active drawing tool.
    pub tool: ShapeTool,
    /// Currently active fill/stroke color as a CSS color string.
    pub color: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tool: ShapeTool::default(), color: DEFAULT_COLOR.to_owned() }
    }
}

/// Gesture tracked between pointer-down and the matching pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A draft shape is being sized by dragging away from the press point.
    Drawing {
        /// Canvas-local point where the drag started; the fixed reference
        /// for all geometry updates during the gesture.
        anchor: Point,
    },
}
