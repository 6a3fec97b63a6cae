use super::*;

// =============================================================
// ShapeTool
// =============================================================

#[test]
fn tool_default_is_circle() {
    assert_eq!(ShapeTool::default(), ShapeTool::Circle);
}

#[test]
fn tool_all_variants_distinct() {
    let variants = [ShapeTool::Circle, ShapeTool::Rect, ShapeTool::Line];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn tool_clone_and_copy() {
    let a = ShapeTool::Rect;
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn tool_debug_format() {
    assert_eq!(format!("{:?}", ShapeTool::Line), "Line");
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_tool_is_circle() {
    let ui = UiState::default();
    assert_eq!(ui.tool, ShapeTool::Circle);
}

#[test]
fn ui_state_default_color() {
    let ui = UiState::default();
    assert_eq!(ui.color, "#007bff");
}

#[test]
fn ui_state_clone_preserves_fields() {
    let ui = UiState { tool: ShapeTool::Line, color: "#123456".to_owned() };
    let copy = ui.clone();
    assert_eq!(copy, ui);
}

// =============================================================
// GestureState
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert_eq!(GestureState::default(), GestureState::Idle);
}

#[test]
fn gesture_drawing_carries_anchor() {
    let g = GestureState::Drawing { anchor: Point::new(12.0, 34.0) };
    let GestureState::Drawing { anchor } = g else {
        panic!("expected Drawing");
    };
    assert_eq!(anchor, Point::new(12.0, 34.0));
}
