//! Raw terminal input decoding.
//!
//! Splits a chunk read from a raw-mode terminal into discrete key presses. Printable
//! characters stay characters; everything else is normalized to a key id such as `left`,
//! `home`, `enter` or `ctrl+a`.

use crate::core::text::ansi::extract_ansi_code;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPress {
    Text(char),
    Key(&'static str),
    /// Escape sequence or control byte with no key id.
    Unknown(String),
}

pub fn decode_keys(data: &str) -> Vec<KeyPress> {
    let mut keys = Vec::new();
    let mut idx = 0;
    while idx < data.len() {
        if let Some(ansi) = extract_ansi_code(data, idx) {
            keys.push(match legacy_sequence_key_id(ansi.code) {
                Some(id) => KeyPress::Key(id),
                None => KeyPress::Unknown(ansi.code.to_string()),
            });
            idx += ansi.length;
            continue;
        }

        let Some(ch) = data[idx..].chars().next() else {
            break;
        };
        idx += ch.len_utf8();
        keys.push(decode_char(ch));
    }
    keys
}

/// Byte length of an escape sequence cut off at the end of `data`, or 0 when the input
/// ends on a complete key.
///
/// A lone `ESC` counts as cut off: it is only the escape key once no further bytes follow.
pub fn incomplete_escape_tail(data: &str) -> usize {
    let bytes = data.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            if let Some(ansi) = extract_ansi_code(data, idx) {
                idx += ansi.length;
                continue;
            }
            if is_escape_prefix(&bytes[idx..]) {
                return bytes.len() - idx;
            }
        }
        idx += data[idx..].chars().next().map_or(1, char::len_utf8);
    }
    0
}

fn is_escape_prefix(tail: &[u8]) -> bool {
    match tail.get(1) {
        None => true,
        // CSI without its final byte, OSC without its terminator.
        Some(b'[') | Some(b']') => true,
        Some(b'O') => tail.len() == 2,
        Some(_) => false,
    }
}

fn decode_char(ch: char) -> KeyPress {
    match ch {
        '\x1b' => KeyPress::Key("escape"),
        '\r' | '\n' => KeyPress::Key("enter"),
        '\t' => KeyPress::Key("tab"),
        '\x7f' | '\x08' => KeyPress::Key("backspace"),
        '\x01'..='\x1a' => match ctrl_key_id(ch) {
            Some(id) => KeyPress::Key(id),
            None => KeyPress::Unknown(ch.to_string()),
        },
        c if c.is_control() => KeyPress::Unknown(c.to_string()),
        c => KeyPress::Text(c),
    }
}

fn ctrl_key_id(ch: char) -> Option<&'static str> {
    const CTRL_IDS: [&str; 26] = [
        "ctrl+a", "ctrl+b", "ctrl+c", "ctrl+d", "ctrl+e", "ctrl+f", "ctrl+g", "ctrl+h", "ctrl+i",
        "ctrl+j", "ctrl+k", "ctrl+l", "ctrl+m", "ctrl+n", "ctrl+o", "ctrl+p", "ctrl+q", "ctrl+r",
        "ctrl+s", "ctrl+t", "ctrl+u", "ctrl+v", "ctrl+w", "ctrl+x", "ctrl+y", "ctrl+z",
    ];
    let offset = (ch as u32).checked_sub(1)?;
    CTRL_IDS.get(offset as usize).copied()
}

fn legacy_sequence_key_id(data: &str) -> Option<&'static str> {
    match data {
        "\x1b[A" | "\x1bOA" => Some("up"),
        "\x1b[B" | "\x1bOB" => Some("down"),
        "\x1b[C" | "\x1bOC" => Some("right"),
        "\x1b[D" | "\x1bOD" => Some("left"),
        "\x1b[H" | "\x1bOH" | "\x1b[1~" | "\x1b[7~" => Some("home"),
        "\x1b[F" | "\x1bOF" | "\x1b[4~" | "\x1b[8~" => Some("end"),
        "\x1b[2~" => Some("insert"),
        "\x1b[3~" => Some("delete"),
        "\x1b[5~" => Some("pageUp"),
        "\x1b[6~" => Some("pageDown"),
        _ => None,
    }
}
