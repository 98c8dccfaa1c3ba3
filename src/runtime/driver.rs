//! Keystroke loop: read raw input, decode keys, dispatch them to a prompt one at a time.

use std::io::{ErrorKind, Read};

use crate::core::host::PromptHost;
use crate::core::input::{decode_keys, incomplete_escape_tail};
use crate::core::keybindings::PromptKeybindings;
use crate::error::Result;
use crate::widgets::{KeyOutcome, TextPrompt};

const READ_CHUNK: usize = 256;

/// Final value of a prompt and whether the user aborted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub value: String,
    pub aborted: bool,
}

/// Drive `prompt` from `input` until it is submitted or aborted.
///
/// Keys without a binding ring the bell, as do edits rejected at a boundary. An escape
/// sequence cut off at the end of a read is held until the next read completes it. A read
/// failing with `WouldBlock` or `TimedOut` means the input went quiet: the held bytes are
/// then decoded as they are, so a lone `ESC` becomes the escape key. End of input aborts the
/// prompt.
pub fn run_prompt<H, R>(
    prompt: &mut TextPrompt<H>,
    keybindings: &PromptKeybindings,
    input: &mut R,
) -> Result<Answer>
where
    H: PromptHost,
    R: Read + ?Sized,
{
    let mut pending: Vec<u8> = Vec::new();
    let mut held = String::new();
    let mut buf = [0u8; READ_CHUNK];

    loop {
        let read = match input.read(&mut buf) {
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                if !held.is_empty() {
                    tracing::trace!(held = held.len(), "flushing escape tail");
                    let chunk = std::mem::take(&mut held);
                    if let Some(answer) = dispatch(prompt, keybindings, &chunk)? {
                        return Ok(answer);
                    }
                }
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if read == 0 {
            tracing::debug!("input closed");
            let chunk = std::mem::take(&mut held);
            if let Some(answer) = dispatch(prompt, keybindings, &chunk)? {
                return Ok(answer);
            }
            return Ok(answer_from(prompt.abort(), prompt));
        }
        pending.extend_from_slice(&buf[..read]);

        let mut chunk = std::mem::take(&mut held);
        chunk.push_str(&take_utf8(&mut pending));
        let tail = incomplete_escape_tail(&chunk);
        held = chunk.split_off(chunk.len() - tail);
        if let Some(answer) = dispatch(prompt, keybindings, &chunk)? {
            return Ok(answer);
        }
    }
}

/// Feed every key in `chunk` to the prompt; `Some` once it has finished.
fn dispatch<H: PromptHost>(
    prompt: &mut TextPrompt<H>,
    keybindings: &PromptKeybindings,
    chunk: &str,
) -> Result<Option<Answer>> {
    for key in decode_keys(chunk) {
        let outcome = match keybindings.action_for(&key) {
            Some(action) => prompt.handle_action(action)?,
            None => KeyOutcome::Bell,
        };
        match outcome {
            KeyOutcome::Bell => prompt.ring_bell(),
            KeyOutcome::Submitted(_) | KeyOutcome::Aborted(_) | KeyOutcome::Closed => {
                return Ok(Some(answer_from(outcome, prompt)));
            }
            KeyOutcome::Updated | KeyOutcome::Retry => {}
        }
    }
    Ok(None)
}

fn answer_from<H: PromptHost>(outcome: KeyOutcome, prompt: &TextPrompt<H>) -> Answer {
    match outcome {
        KeyOutcome::Submitted(value) => Answer {
            value,
            aborted: false,
        },
        KeyOutcome::Aborted(value) => Answer {
            value,
            aborted: true,
        },
        _ => Answer {
            value: prompt.value().to_string(),
            aborted: prompt.is_aborted(),
        },
    }
}

/// Take the longest valid UTF-8 prefix of `pending`, keeping an incomplete trailing
/// character for the next read. Invalid bytes are replaced.
fn take_utf8(pending: &mut Vec<u8>) -> String {
    match std::str::from_utf8(pending.as_slice()) {
        Ok(text) => {
            let text = text.to_string();
            pending.clear();
            text
        }
        Err(err) if err.error_len().is_none() => {
            let valid = err.valid_up_to();
            let text = String::from_utf8_lossy(&pending[..valid]).into_owned();
            pending.drain(..valid);
            text
        }
        Err(_) => {
            let text = String::from_utf8_lossy(pending).into_owned();
            pending.clear();
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::take_utf8;

    #[test]
    fn split_multibyte_char_waits_for_rest() {
        let bytes = "é".as_bytes();
        let mut pending = vec![b'a', bytes[0]];
        assert_eq!(take_utf8(&mut pending), "a");
        assert_eq!(pending, vec![bytes[0]]);

        pending.push(bytes[1]);
        assert_eq!(take_utf8(&mut pending), "é");
        assert!(pending.is_empty());
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let mut pending = vec![b'a', 0xff, b'b'];
        assert_eq!(take_utf8(&mut pending), "a\u{fffd}b");
        assert!(pending.is_empty());
    }
}
