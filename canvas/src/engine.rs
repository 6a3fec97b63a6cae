//! Top-level engine: gesture handling, scene mutation, and the render entry.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::LINE_STROKE_WIDTH;
use crate::geom::Point;
use crate::input::{GestureState, ShapeTool, UiState};
use crate::render;
use crate::shape::{Scene, Shape};

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. The draft shape is private: it exists only between
/// pointer-down and pointer-up, and release is the only way it reaches the
/// scene.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub scene: Scene,
    pub ui: UiState,
    pub gesture: GestureState,
    draft: Option<Shape>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Controls ---

    /// Set the active tool. Applies to the next gesture; a draft already in
    /// flight keeps the variant it started with.
    pub fn set_tool(&mut self, tool: ShapeTool) {
        self.ui.tool = tool;
    }

    /// Set the active color as a CSS color string.
    pub fn set_color(&mut self, color: String) {
        self.ui.color = color;
    }

    // --- Pointer events ---

    /// Begin a drawing gesture anchored at `pos` (canvas-local).
    ///
    /// Ignored when a gesture is already active — no queuing, no error.
    /// Returns whether the draft changed.
    pub fn on_pointer_down(&mut self, pos: Point) -> bool {
        if !matches!(self.gesture, GestureState::Idle) {
            return false;
        }
        self.draft = Some(self.new_draft(pos));
        self.gesture = GestureState::Drawing { anchor: pos };
        true
    }

    /// Resize the draft from its anchor toward `pos`. No-op when idle.
    ///
    /// Geometry is always recomputed from the anchor and `pos`, never from
    /// the previous draft, so repeated moves cannot drift. Coordinates
    /// outside the canvas bounds pass through unclamped.
    pub fn on_pointer_move(&mut self, pos: Point) -> bool {
        let GestureState::Drawing { anchor } = self.gesture else {
            return false;
        };
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        match draft {
            Shape::Circle { r, .. } => {
                *r = anchor.distance_to(pos);
            }
            Shape::Rect { x, y, width, height, .. } => {
                *width = (pos.x - anchor.x).abs();
                *height = (pos.y - anchor.y).abs();
                *x = pos.x.min(anchor.x);
                *y = pos.y.min(anchor.y);
            }
            Shape::Line { x2, y2, .. } => {
                *x2 = pos.x;
                *y2 = pos.y;
            }
        }
        true
    }

    /// End the active gesture, committing the draft to the scene. No-op when
    /// idle.
    ///
    /// Takes no position: release commits whatever the last move produced,
    /// and a release with no prior move commits the zero-size draft as-is.
    pub fn on_pointer_up(&mut self) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };
        self.scene.commit(draft);
        self.gesture = GestureState::Idle;
        true
    }

    /// Remove and return the most recently committed shape, if any. A draft
    /// in flight is unaffected.
    pub fn undo(&mut self) -> Option<Shape> {
        self.scene.undo()
    }

    // --- Queries ---

    /// The in-progress shape, present only between press and release.
    #[must_use]
    pub fn draft(&self) -> Option<&Shape> {
        self.draft.as_ref()
    }

    /// Whether a drawing gesture is currently active.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.draft.is_some()
    }

    // --- Draft construction ---

    fn new_draft(&self, pos: Point) -> Shape {
        match self.ui.tool {
            ShapeTool::Circle => Shape::Circle {
                cx: pos.x,
                cy: pos.y,
                r: 0.0,
                fill: self.ui.color.clone(),
            },
            ShapeTool::Rect => Shape::Rect {
                x: pos.x,
                y: pos.y,
                width: 0.0,
                height: 0.0,
                fill: self.ui.color.clone(),
            },
            ShapeTool::Line => Shape::Line {
                x1: pos.x,
                y1: pos.y,
                x2: pos.x,
                y2: pos.y,
                stroke: self.ui.color.clone(),
                stroke_width: LINE_STROKE_WIDTH,
            },
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated controls ---

    pub fn set_tool(&mut self, tool: ShapeTool) {
        self.core.set_tool(tool);
    }

    pub fn set_color(&mut self, color: String) {
        self.core.set_color(color);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, pos: Point) -> bool {
        self.core.on_pointer_down(pos)
    }

    pub fn on_pointer_move(&mut self, pos: Point) -> bool {
        self.core.on_pointer_move(pos)
    }

    pub fn on_pointer_up(&mut self) -> bool {
        self.core.on_pointer_up()
    }

    pub fn undo(&mut self) -> Option<Shape> {
        self.core.undo()
    }

    // --- Render ---

    /// Draw the current scene and draft to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a Canvas2D call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context_2d()?;
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        render::draw(&ctx, &self.core.scene, self.core.draft(), width, height)
    }

    fn context_2d(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))
    }
}
