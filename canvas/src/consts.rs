//! Shared constants for the canvas crate.

// ── Style defaults ──────────────────────────────────────────────

/// Fill/stroke color in effect before the user picks one.
pub const DEFAULT_COLOR: &str = "#007bff";

/// Stroke width for line shapes, in CSS pixels.
pub const LINE_STROKE_WIDTH: f64 = 2.0;

/// Global alpha applied to the in-progress draft shape.
pub const DRAFT_ALPHA: f64 = 0.5;
