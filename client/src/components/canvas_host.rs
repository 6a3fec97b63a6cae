//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! The canvas crate owns gesture and render logic; this host maps DOM pointer
//! events into engine calls, forwards toolbar selections, and triggers a
//! render pass after every engine call that reports a state change.

use leptos::prelude::*;

use crate::state::ui::SketchUiState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::Engine;

#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{map_tool, pointer_point};

#[cfg(feature = "hydrate")]
fn render_and_log(engine: &mut Engine) {
    let started_ms = js_sys::Date::now();
    if let Err(err) = engine.render() {
        log::error!("canvas render failed: {err:?}");
        return;
    }
    let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
    log::debug!("scene rendered in {elapsed_ms:.1}ms");
}

/// Drawing surface host.
///
/// On hydration, this mounts `canvas::Engine` on the `<canvas>` element,
/// synchronizes toolbar selections into the engine, and renders on updates.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let _ui = expect_context::<RwSignal<SketchUiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "hydrate")]
    let last_undo_seq = RwSignal::new(0_u64);

    // Mount the engine once the canvas element exists.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_mount = canvas_ref.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas);
            let state = _ui.get_untracked();
            instance.set_tool(map_tool(state.tool));
            instance.set_color(state.color);
            render_and_log(&mut instance);
            *engine.borrow_mut() = Some(instance);
        });
    }

    // Keep the engine's tool selection in sync with the toolbar.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let tool = map_tool(_ui.get().tool);
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_tool(tool);
            }
        });
    }

    // Keep the engine's active color in sync with the picker.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let color = _ui.get().color;
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_color(color);
            }
        });
    }

    // Apply one undo per toolbar trigger.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let seq = _ui.get().undo_seq;
            if seq == last_undo_seq.get_untracked() {
                return;
            }
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if engine.undo().is_some() {
                    render_and_log(engine);
                }
            }
            last_undo_seq.set(seq);
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                // Capture so the gesture survives the pointer leaving the
                // canvas; only a release ends it.
                let _ = canvas.set_pointer_capture(ev.pointer_id());
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    if engine.on_pointer_down(pointer_point(&ev, &canvas)) {
                        render_and_log(engine);
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    if engine.on_pointer_move(pointer_point(&ev, &canvas)) {
                        render_and_log(engine);
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    if engine.on_pointer_up() {
                        render_and_log(engine);
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <canvas
            node_ref=canvas_ref
            class="sketch-canvas"
            width="600"
            height="400"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
        ></canvas>
    }
}
