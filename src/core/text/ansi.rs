//! ANSI escape parsing and SGR painting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiCodeKind {
    Csi,
    Osc,
    Ss3,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiCode<'a> {
    pub code: &'a str,
    pub length: usize,
    pub kind: AnsiCodeKind,
}

/// Parse the escape sequence starting at byte `pos`, if any.
///
/// CSI sequences end at their final byte (0x40..=0x7e); OSC strings end at BEL or ST;
/// SS3 sequences are always three bytes.
pub fn extract_ansi_code(input: &str, pos: usize) -> Option<AnsiCode<'_>> {
    let bytes = input.as_bytes();
    if pos + 1 >= bytes.len() || bytes[pos] != 0x1b {
        return None;
    }

    match bytes[pos + 1] {
        b'[' => extract_csi(input, pos),
        b']' => extract_osc(input, pos),
        b'O' => extract_ss3(input, pos),
        _ => None,
    }
}

fn extract_csi(input: &str, pos: usize) -> Option<AnsiCode<'_>> {
    let bytes = input.as_bytes();
    let mut idx = pos + 2;
    while idx < bytes.len() {
        if (0x40..=0x7e).contains(&bytes[idx]) {
            let end = idx + 1;
            return Some(AnsiCode {
                code: &input[pos..end],
                length: end - pos,
                kind: AnsiCodeKind::Csi,
            });
        }
        idx += 1;
    }
    None
}

fn extract_osc(input: &str, pos: usize) -> Option<AnsiCode<'_>> {
    let bytes = input.as_bytes();
    let mut idx = pos + 2;
    while idx < bytes.len() {
        let end = if bytes[idx] == 0x07 {
            Some(idx + 1)
        } else if bytes[idx] == 0x1b && bytes.get(idx + 1) == Some(&b'\\') {
            Some(idx + 2)
        } else {
            None
        };
        if let Some(end) = end {
            return Some(AnsiCode {
                code: &input[pos..end],
                length: end - pos,
                kind: AnsiCodeKind::Osc,
            });
        }
        idx += 1;
    }
    None
}

fn extract_ss3(input: &str, pos: usize) -> Option<AnsiCode<'_>> {
    if pos + 2 >= input.len() || !input.is_char_boundary(pos + 3) {
        return None;
    }
    let end = pos + 3;
    Some(AnsiCode {
        code: &input[pos..end],
        length: end - pos,
        kind: AnsiCodeKind::Ss3,
    })
}

/// Remove every recognised escape sequence, keeping the printable text.
pub fn strip_ansi(input: &str) -> String {
    let mut clean = String::with_capacity(input.len());
    let mut idx = 0;
    while idx < input.len() {
        if let Some(ansi) = extract_ansi_code(input, idx) {
            idx += ansi.length;
            continue;
        }
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        clean.push(ch);
        idx += ch.len_utf8();
    }
    clean
}

/// SGR styles used by the prompt decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Bold,
    Gray,
    Red,
    Green,
    Cyan,
}

impl Paint {
    fn codes(self) -> (&'static str, &'static str) {
        match self {
            Paint::Bold => ("\x1b[1m", "\x1b[22m"),
            Paint::Gray => ("\x1b[90m", "\x1b[39m"),
            Paint::Red => ("\x1b[31m", "\x1b[39m"),
            Paint::Green => ("\x1b[32m", "\x1b[39m"),
            Paint::Cyan => ("\x1b[36m", "\x1b[39m"),
        }
    }

    pub fn apply(self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let (open, close) = self.codes();
        format!("{open}{text}{close}")
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_ansi_code, strip_ansi, AnsiCodeKind, Paint};

    #[test]
    fn csi_runs_to_final_byte() {
        let code = extract_ansi_code("\x1b[12;3Hrest", 0).expect("csi");
        assert_eq!(code.code, "\x1b[12;3H");
        assert_eq!(code.kind, AnsiCodeKind::Csi);
    }

    #[test]
    fn ss3_is_three_bytes() {
        let code = extract_ansi_code("\x1bOD", 0).expect("ss3");
        assert_eq!(code.length, 3);
        assert_eq!(code.kind, AnsiCodeKind::Ss3);
    }

    #[test]
    fn lone_escape_is_not_a_sequence() {
        assert_eq!(extract_ansi_code("\x1b", 0), None);
        assert_eq!(extract_ansi_code("\x1b[", 0), None);
    }

    #[test]
    fn strip_removes_sgr_and_osc() {
        let painted = format!("{} \x1b]8;;https://x\x07link", Paint::Bold.apply("hi"));
        assert_eq!(strip_ansi(&painted), "hi link");
    }

    #[test]
    fn paint_skips_empty_text() {
        assert_eq!(Paint::Gray.apply(""), "");
        assert_eq!(Paint::Red.apply("no"), "\x1b[31mno\x1b[39m");
    }
}
