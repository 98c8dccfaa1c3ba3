//! Prompt widgets.

pub mod text_prompt;

pub use text_prompt::{KeyOutcome, TextPrompt, TextPromptOptions, DEFAULT_ERROR_MESSAGE};
