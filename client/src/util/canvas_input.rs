//! Canvas input mapping and pointer helper utilities.

#[cfg(feature = "hydrate")]
use canvas::geom::Point as CanvasPoint;
#[cfg(feature = "hydrate")]
use canvas::input::ShapeTool;

#[cfg(feature = "hydrate")]
use crate::state::ui::ToolKind;

#[cfg(feature = "hydrate")]
pub fn map_tool(tool: ToolKind) -> ShapeTool {
    match tool {
        ToolKind::Circle => ShapeTool::Circle,
        ToolKind::Rect => ShapeTool::Rect,
        ToolKind::Line => ShapeTool::Line,
    }
}

/// Translate a pointer event into canvas-local coordinates using the canvas
/// element's current bounding rectangle.
///
/// With pointer capture active the pointer may sit outside the element, so
/// the result can be negative or exceed the canvas size; the engine accepts
/// such coordinates unclamped.
#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent, canvas: &web_sys::HtmlCanvasElement) -> CanvasPoint {
    let rect = canvas.get_bounding_client_rect();
    CanvasPoint::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    )
}
