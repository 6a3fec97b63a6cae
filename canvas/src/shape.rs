//! Scene model: shape variants and the ordered list of committed shapes.
//!
//! `Shape` is the closed set of drawable primitives, serde-tagged so each
//! scene entry serializes to the same JSON record the drawing surface uses on
//! screen (`{"type":"circle","cx":...}`). `Scene` owns the committed shapes
//! in insertion order; later entries paint over earlier ones. The renderer
//! reads from `Scene` via `shapes` to determine draw order.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

/// A drawable primitive, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Filled circle grown outward from a fixed center point.
    Circle {
        /// Center x in canvas-local pixels.
        cx: f64,
        /// Center y in canvas-local pixels.
        cy: f64,
        /// Radius; non-negative by construction (a Euclidean distance).
        r: f64,
        /// Fill color as a CSS color string.
        fill: String,
    },
    /// Axis-aligned filled rectangle. `x`/`y` is the top-left corner after
    /// normalization, whichever direction the defining drag went.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        /// Fill color as a CSS color string.
        fill: String,
    },
    /// Straight stroked segment between two endpoints.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Stroke color as a CSS color string.
        stroke: String,
        /// Stroke width in CSS pixels.
        #[serde(rename = "strokeWidth")]
        stroke_width: f64,
    },
}

/// Ordered list of committed shapes. Insertion order is paint order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a finished shape. This is the sole growth point for the scene.
    pub fn commit(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove and return the most recently committed shape. Returns `None`
    /// on an empty scene.
    pub fn undo(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    /// Committed shapes in paint order (earliest first).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of committed shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if no shapes have been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
