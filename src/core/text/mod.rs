//! Text helpers (ANSI parsing, painting, width calculations).
//!
//! These helpers are pure (string in/string out) and live under `core` so the widget and the
//! renderer can share them.

pub mod ansi;
pub mod width;
