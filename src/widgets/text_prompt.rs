//! Single-line text prompt.

use crate::core::host::{PromptHost, PromptState};
use crate::core::keybindings::PromptAction;
use crate::core::output::{OutputGate, TerminalCmd};
use crate::core::style::Transform;
use crate::core::terminal::Terminal;
use crate::core::text::ansi::Paint;
use crate::core::text::width::visible_width;
use crate::core::validate::{Validation, Validator};
use crate::error::{PromptError, Result};
use crate::render::{PromptRenderer, RenderFrame};

pub const DEFAULT_ERROR_MESSAGE: &str = "Please Enter A Valid Value";

#[derive(Debug)]
pub struct TextPromptOptions {
    message: String,
    style: String,
    initial: String,
    validator: Validator,
    error_message: String,
}

impl TextPromptOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: Transform::default().name().to_string(),
            initial: String::new(),
            validator: Validator::default(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    /// Render style name: `default`, `password`, `emoji` or `invisible`.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Default value, shown dimmed while nothing has been typed.
    pub fn initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Message shown when the validator rejects without one of its own.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }
}

/// Result of one edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// State changed (or the cursor moved) and the prompt was repainted.
    Updated,
    /// Rejected at a boundary; nothing changed.
    Bell,
    /// Submission failed validation; the value was cleared and the error line is showing.
    Retry,
    Submitted(String),
    Aborted(String),
    /// The prompt is already done or aborted.
    Closed,
}

struct HostSink<'a, H: PromptHost>(&'a mut H);

impl<H: PromptHost> Terminal for HostSink<'_, H> {
    fn write(&mut self, data: &str) {
        self.0.write_output(data);
    }
}

/// Editable single-line input with placeholder default, submit-time validation and an
/// in-place error line.
///
/// `cursor` counts characters, never bytes. It stays within `0..=value.chars().count()`.
pub struct TextPrompt<H: PromptHost> {
    host: H,
    message: String,
    transform: Transform,
    initial: String,
    validator: Validator,

    value: String,
    cursor: usize,
    placeholder: bool,
    rendered: String,
    error: bool,
    error_msg: String,
    done: bool,
    aborted: bool,

    renderer: PromptRenderer,
    output: OutputGate,
}

impl<H: PromptHost> TextPrompt<H> {
    /// Build the prompt and draw it once. Fails before any output on an unknown style.
    pub fn new(options: TextPromptOptions, host: H) -> Result<Self> {
        let transform = Transform::from_name(&options.style)?;
        let mut prompt = Self {
            host,
            message: options.message,
            transform,
            initial: options.initial,
            validator: options.validator,
            value: String::new(),
            cursor: 0,
            placeholder: false,
            rendered: String::new(),
            error: false,
            error_msg: options.error_message,
            done: false,
            aborted: false,
            renderer: PromptRenderer::new(),
            output: OutputGate::new(),
        };
        prompt.set_value(String::new());
        prompt.cursor = prompt.initial_cursor();
        prompt.paint();
        Ok(prompt)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn scale(&self) -> usize {
        self.transform.scale()
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn error_message(&self) -> &str {
        &self.error_msg
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Extra lines below the prompt line consumed by the last render.
    pub fn cursor_y(&self) -> usize {
        self.renderer.last().cursor_y
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn is_closed(&self) -> bool {
        self.done || self.aborted
    }

    fn initial_cursor(&self) -> usize {
        usize::from(!self.initial.is_empty())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    /// The single mutation point for `value`; keeps `placeholder` and `rendered` in step.
    fn set_value(&mut self, value: String) {
        self.placeholder = value.is_empty() && !self.initial.is_empty();
        self.rendered = if self.placeholder {
            Paint::Gray.apply(&self.transform.render(&self.initial))
        } else {
            self.transform.render(&value)
        };
        self.value = value;
        if self.placeholder {
            self.cursor = 0;
        }
        self.notify();
    }

    fn notify(&mut self) {
        self.host.on_change(PromptState {
            value: &self.value,
            done: self.done,
            aborted: self.aborted,
        });
    }

    fn bell(&self, op: &'static str) -> KeyOutcome {
        tracing::trace!(op, cursor = self.cursor, placeholder = self.placeholder, "bell");
        KeyOutcome::Bell
    }

    /// Columns the rendered value occupies left of the cursor.
    fn cursor_col(&self) -> usize {
        if self.placeholder {
            return 0;
        }
        let head = &self.value[..self.byte_offset(self.cursor)];
        visible_width(&self.transform.render(head))
    }

    fn paint(&mut self) {
        let error = self.error.then_some(self.error_msg.as_str());
        let cursor_col = self.cursor_col();
        let frame = RenderFrame {
            message: &self.message,
            rendered: &self.rendered,
            placeholder: self.placeholder,
            cursor_col,
            done: self.done,
            aborted: self.aborted,
            error,
        };
        let cmds = self.renderer.render(&frame);
        self.output.extend(cmds);
        self.output.flush(&mut HostSink(&mut self.host));
    }

    fn finish(&mut self) {
        self.notify();
        self.paint();
        self.output.push(TerminalCmd::BytesStatic("\n"));
        self.output.flush(&mut HostSink(&mut self.host));
        self.host.close();
    }

    /// Ring the terminal bell.
    pub fn ring_bell(&mut self) {
        self.output.push(TerminalCmd::Bell);
        self.output.flush(&mut HostSink(&mut self.host));
    }

    /// Repaint the current state.
    pub fn render(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        self.paint();
        KeyOutcome::Updated
    }

    /// Shift the cursor by `n` characters, clamped to the value. Ignored in placeholder mode.
    pub fn move_cursor(&mut self, n: isize) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        if !self.placeholder {
            let target = self.cursor.saturating_add_signed(n);
            self.cursor = target.min(self.char_len());
        }
        KeyOutcome::Updated
    }

    /// Insert `ch` at the cursor. Typing out of placeholder mode leaves the cursor at 0.
    ///
    /// Control characters are rejected with a bell; the value stays on one line.
    pub fn insert(&mut self, ch: char) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        if ch.is_control() {
            return self.bell("insert");
        }
        let was_placeholder = self.placeholder;
        let at = self.byte_offset(self.cursor);
        let mut next = String::with_capacity(self.value.len() + ch.len_utf8());
        next.push_str(&self.value[..at]);
        next.push(ch);
        next.push_str(&self.value[at..]);

        let cursor = self.cursor.min(self.char_len());
        self.set_value(next);
        self.cursor = if was_placeholder { 0 } else { cursor + 1 };
        self.error = false;
        self.paint();
        KeyOutcome::Updated
    }

    /// Remove the character before the cursor.
    pub fn delete(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        if self.value.is_empty() || self.cursor == 0 {
            return self.bell("delete");
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        let mut next = String::with_capacity(self.value.len());
        next.push_str(&self.value[..start]);
        next.push_str(&self.value[end..]);

        self.set_value(next);
        self.move_cursor(-1);
        self.paint();
        KeyOutcome::Updated
    }

    pub fn left(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        if self.cursor == 0 || self.placeholder {
            return self.bell("left");
        }
        self.move_cursor(-1);
        self.paint();
        KeyOutcome::Updated
    }

    pub fn right(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        let at_end = self.cursor * self.transform.scale() >= visible_width(&self.rendered)
            || self.cursor >= self.char_len();
        if at_end || self.placeholder {
            return self.bell("right");
        }
        self.move_cursor(1);
        self.paint();
        KeyOutcome::Updated
    }

    pub fn first(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        self.cursor = 0;
        self.paint();
        KeyOutcome::Updated
    }

    pub fn last(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        self.cursor = self.char_len();
        self.paint();
        KeyOutcome::Updated
    }

    /// Accept the placeholder default as typed text, cursor at its end.
    pub fn next(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        if !self.placeholder {
            return self.bell("next");
        }
        self.set_value(self.initial.clone());
        self.cursor = self.char_len();
        self.paint();
        KeyOutcome::Updated
    }

    /// Clear the value and put the cursor back where a fresh prompt starts.
    pub fn reset(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        self.set_value(String::new());
        self.cursor = self.initial_cursor();
        self.paint();
        KeyOutcome::Updated
    }

    /// Validate the value (or the default when empty) and either finish or show the error.
    ///
    /// A validator fault is returned untouched and leaves the prompt as it was.
    pub fn submit(&mut self) -> Result<KeyOutcome> {
        if self.is_closed() {
            return Ok(KeyOutcome::Closed);
        }
        let effective = if self.value.is_empty() {
            self.initial.clone()
        } else {
            self.value.clone()
        };
        let verdict = self
            .validator
            .check(&effective)
            .map_err(PromptError::Validator)?;

        if verdict.is_valid() {
            self.set_value(effective);
            self.error = false;
            self.done = true;
            self.aborted = false;
            tracing::info!("prompt submitted");
            self.finish();
            return Ok(KeyOutcome::Submitted(self.value.clone()));
        }

        if let Validation::Message(message) = verdict {
            self.error_msg = message;
        }
        self.error = true;
        self.set_value(String::new());
        self.cursor = 0;
        tracing::debug!(error = %self.error_msg, "submission rejected");
        self.paint();
        Ok(KeyOutcome::Retry)
    }

    /// Finish without validating, keeping the value (or the default when empty).
    pub fn abort(&mut self) -> KeyOutcome {
        if self.is_closed() {
            return KeyOutcome::Closed;
        }
        if self.value.is_empty() {
            self.set_value(self.initial.clone());
        }
        self.done = true;
        self.aborted = true;
        tracing::info!("prompt aborted");
        self.finish();
        KeyOutcome::Aborted(self.value.clone())
    }

    pub fn handle_action(&mut self, action: PromptAction) -> Result<KeyOutcome> {
        let outcome = match action {
            PromptAction::Insert(ch) => self.insert(ch),
            PromptAction::Delete => self.delete(),
            PromptAction::Left => self.left(),
            PromptAction::Right => self.right(),
            PromptAction::First => self.first(),
            PromptAction::Last => self.last(),
            PromptAction::Next => self.next(),
            PromptAction::Reset => self.reset(),
            PromptAction::Submit => return self.submit(),
            PromptAction::Abort => self.abort(),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyOutcome, TextPrompt, TextPromptOptions};
    use crate::core::host::PromptHost;

    #[derive(Default)]
    struct NullHost;

    impl PromptHost for NullHost {
        fn write_output(&mut self, _data: &str) {}
    }

    #[test]
    fn byte_offset_follows_char_boundaries() {
        let mut prompt = TextPrompt::new(TextPromptOptions::new("q"), NullHost).expect("prompt");
        for ch in "a日b".chars() {
            prompt.insert(ch);
        }
        assert_eq!(prompt.byte_offset(0), 0);
        assert_eq!(prompt.byte_offset(1), 1);
        assert_eq!(prompt.byte_offset(2), 4);
        assert_eq!(prompt.byte_offset(3), 5);
        assert_eq!(prompt.byte_offset(9), 5);
    }

    #[test]
    fn wide_chars_stop_right_at_value_end() {
        let mut prompt = TextPrompt::new(TextPromptOptions::new("q"), NullHost).expect("prompt");
        prompt.insert('日');
        prompt.insert('本');
        prompt.first();
        assert_eq!(prompt.right(), KeyOutcome::Updated);
        assert_eq!(prompt.right(), KeyOutcome::Updated);
        assert_eq!(prompt.right(), KeyOutcome::Bell);
        assert_eq!(prompt.cursor(), 2);
    }

    #[test]
    fn cursor_starts_at_one_with_a_default() {
        let prompt = TextPrompt::new(TextPromptOptions::new("q").initial("x"), NullHost)
            .expect("prompt");
        assert_eq!(prompt.cursor(), 1);
        assert!(prompt.is_placeholder());
    }
}
