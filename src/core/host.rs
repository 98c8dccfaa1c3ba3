//! Capabilities a prompt needs from whoever drives it.

/// Snapshot passed to change observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptState<'a> {
    pub value: &'a str,
    pub done: bool,
    pub aborted: bool,
}

/// Host lifecycle seam. The prompt owns its host and calls back into it; it never writes to
/// a terminal directly.
pub trait PromptHost {
    /// Value or terminal flags changed. Fired before the matching render.
    fn on_change(&mut self, _state: PromptState<'_>) {}

    /// Append rendered bytes to the output sink.
    fn write_output(&mut self, data: &str);

    /// The prompt reached a terminal state; it accepts no further input.
    fn close(&mut self) {}
}
