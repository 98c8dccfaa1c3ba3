//! Single-line interactive text prompt for terminals.
//!
//! Invariant: everything a prompt writes (frames and bells) reaches its host only through
//! `core::output::OutputGate::flush(..)`.
//!
//! # Public API Overview
//! - Configure a prompt with [`TextPromptOptions`] and build it with [`TextPrompt::new`].
//! - Drive it with edit operations ([`TextPrompt::insert`], [`TextPrompt::submit`], ...) or
//!   from raw terminal input via [`run_prompt`].
//! - Plug it into a host through [`PromptHost`]; [`TerminalHost`] writes to any
//!   [`Terminal`].
//! - Validate submissions with a [`Validator`].

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod platform;
pub mod render;
pub mod runtime;
pub mod widgets;

/// Prompt widget, options, and per-operation outcome.
pub use crate::widgets::{KeyOutcome, TextPrompt, TextPromptOptions, DEFAULT_ERROR_MESSAGE};

/// Errors.
pub use crate::error::{PromptError, Result};

/// Host lifecycle seam.
pub use crate::core::host::{PromptHost, PromptState};

/// Render styles.
pub use crate::core::style::Transform;

/// Submission validation.
pub use crate::core::validate::{Validation, Validator, ValidatorError};

/// Key decoding and bindings.
pub use crate::core::input::{decode_keys, KeyPress};
pub use crate::core::keybindings::{PromptAction, PromptKeybindings};

/// Output commands and sinks.
pub use crate::core::output::{OutputGate, TerminalCmd};
pub use crate::core::terminal::{Terminal, WriterTerminal};

/// Keystroke loop and terminal host.
pub use crate::runtime::{run_prompt, Answer, TerminalHost};

#[cfg(unix)]
pub use crate::platform::{PolledStdin, RawModeGuard};

/// Visible width helper that ignores ANSI control sequences.
pub use crate::core::text::width::visible_width;
/// Escape-sequence stripper.
pub use crate::core::text::ansi::strip_ansi;
