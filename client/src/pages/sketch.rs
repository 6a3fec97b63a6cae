//! The drawing surface page: heading, controls, and the canvas host.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::toolbar::Toolbar;

/// Single-page drawing surface.
#[component]
pub fn SketchPage() -> impl IntoView {
    view! {
        <div class="sketch">
            <h2>"Interactive Drawing Surface"</h2>
            <Toolbar/>
            <CanvasHost/>
        </div>
    }
}
