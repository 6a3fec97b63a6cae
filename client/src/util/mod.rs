//! Utility helpers shared across client UI modules.
//!
//! Utility modules isolate browser/environment concerns from page and
//! component logic.

pub mod canvas_input;
