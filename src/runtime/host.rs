//! Terminal-backed prompt host.

use crate::core::host::{PromptHost, PromptState};
use crate::core::terminal::Terminal;

type ChangeHandler = Box<dyn FnMut(PromptState<'_>)>;

/// Host that forwards output to a [`Terminal`] and change notifications to an optional
/// observer.
pub struct TerminalHost<T: Terminal> {
    terminal: T,
    on_change: Option<ChangeHandler>,
    closed: bool,
}

impl<T: Terminal> TerminalHost<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            terminal,
            on_change: None,
            closed: false,
        }
    }

    pub fn set_on_change(&mut self, handler: Option<ChangeHandler>) {
        self.on_change = handler;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}

impl<T: Terminal> PromptHost for TerminalHost<T> {
    fn on_change(&mut self, state: PromptState<'_>) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(state);
        }
    }

    fn write_output(&mut self, data: &str) {
        self.terminal.write(data);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
