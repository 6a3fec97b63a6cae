//! Local UI control state for the drawing surface.
//!
//! Keeps the control-surface selections (color, shape tool) and the undo
//! trigger in one context signal so the toolbar and the canvas host can
//! communicate without touching the engine directly.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shape choices offered by the toolbar selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolKind {
    #[default]
    Circle,
    Rect,
    Line,
}

impl ToolKind {
    /// Parse a toolbar `<select>` value. Unknown values fall back to the
    /// default tool.
    #[must_use]
    pub fn from_select_value(value: &str) -> Self {
        match value {
            "rect" => Self::Rect,
            "line" => Self::Line,
            _ => Self::Circle,
        }
    }

    /// The `<select>` option value for this tool.
    #[must_use]
    pub fn select_value(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Line => "line",
        }
    }
}

/// UI state shared between the toolbar and the canvas host.
#[derive(Clone, Debug, PartialEq)]
pub struct SketchUiState {
    /// Active fill/stroke color as a CSS hex string.
    pub color: String,
    /// Active shape tool.
    pub tool: ToolKind,
    /// Monotonic counter bumped by the undo button; the canvas host applies
    /// one undo per increment.
    pub undo_seq: u64,
}

impl Default for SketchUiState {
    fn default() -> Self {
        Self {
            color: "#007bff".to_owned(),
            tool: ToolKind::default(),
            undo_seq: 0,
        }
    }
}
