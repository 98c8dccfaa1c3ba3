//! Typed terminal output commands and a single output gate.
//!
//! Invariant: everything a prompt writes, bells included, flows through `OutputGate::flush(..)`.

use crate::core::terminal::Terminal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCmd {
    /// Raw text (may itself contain SGR styling) written as-is.
    Bytes(String),
    /// Static raw bytes/control sequences.
    BytesStatic(&'static str),

    /// Cursor movement.
    CursorUp(usize),
    CursorDown(usize),
    /// Column 0 of the current line.
    CursorLineStart,
    /// Absolute zero-based column on the current line.
    CursorToColumn(usize),
    /// Relative horizontal move; negative moves left.
    CursorMove(isize),

    /// Erase `n` lines ending at the cursor line, leaving the cursor at column 0 of the topmost.
    EraseLines(usize),

    Bell,
}

impl TerminalCmd {
    /// Append the escape encoding of this command to `out`.
    pub fn encode_into(&self, out: &mut String) {
        match self {
            TerminalCmd::Bytes(data) => out.push_str(data),
            TerminalCmd::BytesStatic(data) => out.push_str(data),
            TerminalCmd::CursorUp(0) | TerminalCmd::CursorDown(0) | TerminalCmd::CursorMove(0) => {}
            TerminalCmd::CursorUp(n) => out.push_str(&format!("\x1b[{n}A")),
            TerminalCmd::CursorDown(n) => out.push_str(&format!("\x1b[{n}B")),
            TerminalCmd::CursorLineStart => out.push_str("\x1b[G"),
            TerminalCmd::CursorToColumn(col) => out.push_str(&format!("\x1b[{}G", col + 1)),
            TerminalCmd::CursorMove(dx) if *dx < 0 => {
                out.push_str(&format!("\x1b[{}D", dx.unsigned_abs()))
            }
            TerminalCmd::CursorMove(dx) => out.push_str(&format!("\x1b[{dx}C")),
            TerminalCmd::EraseLines(count) => {
                for i in 0..*count {
                    out.push_str("\x1b[2K");
                    if i + 1 < *count {
                        out.push_str("\x1b[1A");
                    }
                }
                if *count > 0 {
                    out.push_str("\x1b[G");
                }
            }
            TerminalCmd::Bell => out.push('\x07'),
        }
    }

    pub fn encode(&self) -> String {
        let mut out = String::new();
        self.encode_into(&mut out);
        out
    }
}

/// Encode a command batch into one contiguous string.
pub fn encode_all(cmds: &[TerminalCmd]) -> String {
    let mut out = String::new();
    for cmd in cmds {
        cmd.encode_into(&mut out);
    }
    out
}

#[derive(Debug, Default)]
pub struct OutputGate {
    cmds: Vec<TerminalCmd>,
}

impl OutputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: TerminalCmd) {
        self.cmds.push(cmd);
    }

    pub fn extend<I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = TerminalCmd>,
    {
        self.cmds.extend(cmds);
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Flush buffered commands to the terminal as a single write.
    ///
    /// This is the single write gate: `Terminal::write(..)` must not be called
    /// from anywhere else.
    pub fn flush<T: Terminal + ?Sized>(&mut self, term: &mut T) {
        if self.cmds.is_empty() {
            return;
        }
        let data = encode_all(&self.cmds);
        self.cmds.clear();
        if !data.is_empty() {
            term.write(&data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_all, OutputGate, TerminalCmd};
    use crate::core::terminal::Terminal;

    #[derive(Default)]
    struct Sink(Vec<String>);

    impl Terminal for Sink {
        fn write(&mut self, data: &str) {
            self.0.push(data.to_string());
        }
    }

    #[test]
    fn relative_moves_pick_direction() {
        assert_eq!(TerminalCmd::CursorMove(-3).encode(), "\x1b[3D");
        assert_eq!(TerminalCmd::CursorMove(2).encode(), "\x1b[2C");
        assert_eq!(TerminalCmd::CursorMove(0).encode(), "");
    }

    #[test]
    fn column_is_one_based_on_the_wire() {
        assert_eq!(TerminalCmd::CursorToColumn(0).encode(), "\x1b[1G");
        assert_eq!(TerminalCmd::CursorToColumn(9).encode(), "\x1b[10G");
    }

    #[test]
    fn erase_lines_walks_upwards() {
        assert_eq!(TerminalCmd::EraseLines(1).encode(), "\x1b[2K\x1b[G");
        assert_eq!(
            TerminalCmd::EraseLines(2).encode(),
            "\x1b[2K\x1b[1A\x1b[2K\x1b[G"
        );
        assert_eq!(TerminalCmd::EraseLines(0).encode(), "");
    }

    #[test]
    fn flush_writes_once_and_drains() {
        let mut gate = OutputGate::new();
        gate.push(TerminalCmd::Bytes("hi".to_string()));
        gate.extend([TerminalCmd::CursorUp(1), TerminalCmd::Bell]);
        let mut sink = Sink::default();
        gate.flush(&mut sink);
        assert_eq!(sink.0, vec!["hi\x1b[1A\x07".to_string()]);
        assert!(gate.is_empty());

        gate.flush(&mut sink);
        assert_eq!(sink.0.len(), 1);
    }

    #[test]
    fn encode_all_concatenates() {
        let cmds = [TerminalCmd::CursorDown(1), TerminalCmd::CursorLineStart];
        assert_eq!(encode_all(&cmds), "\x1b[1B\x1b[G");
    }
}
