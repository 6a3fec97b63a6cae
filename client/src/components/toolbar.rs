//! Control surface: color picker, shape selector, and undo.

use leptos::prelude::*;

use crate::state::ui::{SketchUiState, ToolKind};

/// Toolbar for the drawing surface.
///
/// Writes only the shared UI state; the canvas host picks the changes up and
/// forwards them into the engine.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<SketchUiState>>();

    let on_color_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        ui.update(|u| u.color = value);
    };

    let on_shape_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        ui.update(|u| u.tool = ToolKind::from_select_value(&value));
    };

    let on_undo = move |_| {
        ui.update(|u| u.undo_seq = u.undo_seq.saturating_add(1));
    };

    view! {
        <div class="controls">
            <label>
                "Color:"
                <input
                    type="color"
                    prop:value=move || ui.get().color
                    on:input=on_color_input
                />
            </label>

            <label>
                "Shape:"
                <select
                    prop:value=move || ui.get().tool.select_value()
                    on:change=on_shape_change
                >
                    <option value="circle">"Circle"</option>
                    <option value="rect">"Rectangle"</option>
                    <option value="line">"Line"</option>
                </select>
            </label>

            <button on:click=on_undo title="Remove the last shape">
                "Undo"
            </button>
        </div>
    }
}
