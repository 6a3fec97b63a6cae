//! Rendering: draws the committed scene and the in-progress draft to a 2D
//! context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of
//! scene state and produces pixels — it does not mutate any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::DRAFT_ALPHA;
use crate::shape::{Scene, Shape};

/// Draw the full scene: committed shapes in paint order, then the draft.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. The draft, when present,
/// is drawn last so it appears on top, at reduced opacity so in-progress
/// geometry reads as provisional.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    draft: Option<&Shape>,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear.
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    // Layer 2: committed shapes, earliest first so later ones paint on top.
    for shape in scene.shapes() {
        draw_shape(ctx, shape)?;
    }

    // Layer 3: the draft at reduced opacity.
    if let Some(shape) = draft {
        ctx.save();
        ctx.set_global_alpha(DRAFT_ALPHA);
        draw_shape(ctx, shape)?;
        ctx.restore();
    }

    Ok(())
}

// =============================================================
// Shape renderers
// =============================================================

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    match shape {
        Shape::Circle { cx, cy, r, fill } => draw_circle(ctx, *cx, *cy, *r, fill),
        Shape::Rect { x, y, width, height, fill } => {
            draw_rect(ctx, *x, *y, *width, *height, fill);
            Ok(())
        }
        Shape::Line { x1, y1, x2, y2, stroke, stroke_width } => {
            draw_line(ctx, *x1, *y1, *x2, *y2, stroke, *stroke_width);
            Ok(())
        }
    }
}

/// Zero-radius circles are legal (a press with no move) and paint nothing.
fn draw_circle(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, r: f64, fill: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(cx, cy, r, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();
    Ok(())
}

fn draw_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, width: f64, height: f64, fill: &str) {
    ctx.set_fill_style_str(fill);
    ctx.fill_rect(x, y, width, height);
}

fn draw_line(
    ctx: &CanvasRenderingContext2d,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    stroke: &str,
    stroke_width: f64,
) {
    ctx.save();
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(stroke_width);
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
    ctx.restore();
}
