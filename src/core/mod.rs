//! Core interfaces and types.

pub mod host;
pub mod input;
pub mod keybindings;
pub mod output;
pub mod style;
pub mod terminal;
pub mod text;
pub mod validate;
