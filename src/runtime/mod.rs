//! Runtime orchestration: the terminal host and the keystroke loop.

pub mod driver;
pub mod host;

pub use driver::{run_prompt, Answer};
pub use host::TerminalHost;
