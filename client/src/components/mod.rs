//! Reusable UI component modules.
//!
//! Components read and write shared state from Leptos context providers; the
//! canvas host additionally bridges into the imperative `canvas` engine.

pub mod canvas_host;
pub mod toolbar;
