use super::*;

// =============================================================
// SketchUiState defaults
// =============================================================

#[test]
fn default_color_matches_initial_picker_value() {
    let state = SketchUiState::default();
    assert_eq!(state.color, "#007bff");
}

#[test]
fn default_tool_is_circle() {
    let state = SketchUiState::default();
    assert_eq!(state.tool, ToolKind::Circle);
}

#[test]
fn default_undo_seq_is_zero() {
    let state = SketchUiState::default();
    assert_eq!(state.undo_seq, 0);
}

// =============================================================
// ToolKind select mapping
// =============================================================

#[test]
fn select_values_round_trip() {
    for tool in [ToolKind::Circle, ToolKind::Rect, ToolKind::Line] {
        assert_eq!(ToolKind::from_select_value(tool.select_value()), tool);
    }
}

#[test]
fn unknown_select_value_falls_back_to_default() {
    assert_eq!(ToolKind::from_select_value("hexagon"), ToolKind::Circle);
    assert_eq!(ToolKind::from_select_value(""), ToolKind::Circle);
}

#[test]
fn select_value_strings() {
    assert_eq!(ToolKind::Circle.select_value(), "circle");
    assert_eq!(ToolKind::Rect.select_value(), "rect");
    assert_eq!(ToolKind::Line.select_value(), "line");
}
