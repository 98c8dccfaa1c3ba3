//! Incremental prompt renderer.
//!
//! Each render erases exactly what the previous one drew and redraws in place using relative
//! cursor movement; the screen and scrollback are never cleared.

use crate::core::output::TerminalCmd;
use crate::core::style::{delimiter, symbol};
use crate::core::text::ansi::Paint;
use crate::core::text::width::visible_width;

/// Everything the renderer needs from the edit state for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub message: &'a str,
    /// Transformed value, or the dimmed placeholder.
    pub rendered: &'a str,
    pub placeholder: bool,
    /// Display columns of the rendered value left of the cursor.
    pub cursor_col: usize,
    pub done: bool,
    pub aborted: bool,
    /// Error line shown beneath the prompt, if any.
    pub error: Option<&'a str>,
}

/// What the previous render left on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastRender {
    /// Lines to erase before drawing again.
    pub erase_lines: usize,
    /// Lines below the prompt line the previous render drew (the error block).
    pub cursor_y: usize,
}

impl Default for LastRender {
    fn default() -> Self {
        Self {
            erase_lines: 1,
            cursor_y: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub cmds: Vec<TerminalCmd>,
    /// Display width of the prompt line; the column restored after an error line.
    pub anchor: usize,
    /// Final relative move from the end of the rendered text to the edit position.
    pub cursor_offset: isize,
    pub next: LastRender,
}

/// Compose the prompt line: status symbol, bold message, delimiter, rendered value.
pub fn compose_line(frame: &RenderFrame<'_>) -> String {
    [
        symbol(frame.done, frame.aborted),
        Paint::Bold.apply(frame.message),
        delimiter(frame.done),
        frame.rendered.to_string(),
    ]
    .join(" ")
}

/// Relative move that brings the cursor from the end of the line to the edit position.
pub fn cursor_offset(frame: &RenderFrame<'_>) -> isize {
    let width = visible_width(frame.rendered) as isize;
    if frame.placeholder {
        -width
    } else {
        frame.cursor_col as isize - width
    }
}

pub fn plan(frame: &RenderFrame<'_>, last: LastRender) -> RenderPlan {
    let mut cmds = Vec::with_capacity(6);

    if last.cursor_y > 0 {
        cmds.push(TerminalCmd::CursorDown(last.cursor_y));
    }

    let mut content = compose_line(frame);
    let anchor = visible_width(&content);

    if let Some(message) = frame.error {
        content.push('\n');
        content.push_str(&Paint::Red.apply(message));
    }
    let lines = content.split('\n').count();
    let cursor_y = lines - 1;

    cmds.push(TerminalCmd::EraseLines(last.erase_lines));
    cmds.push(TerminalCmd::Bytes(content.clone()));

    if cursor_y > 0 {
        cmds.push(TerminalCmd::CursorUp(cursor_y));
        cmds.push(TerminalCmd::CursorLineStart);
        cmds.push(TerminalCmd::CursorToColumn(anchor));
    }

    let offset = cursor_offset(frame);
    cmds.push(TerminalCmd::CursorMove(offset));

    RenderPlan {
        cmds,
        anchor,
        cursor_offset: offset,
        next: LastRender {
            erase_lines: lines,
            cursor_y,
        },
    }
}

#[derive(Debug, Default)]
pub struct PromptRenderer {
    last: LastRender,
}

impl PromptRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> LastRender {
        self.last
    }

    /// Produce the commands for `frame` and remember what they leave on screen.
    pub fn render(&mut self, frame: &RenderFrame<'_>) -> Vec<TerminalCmd> {
        let plan = plan(frame, self.last);
        tracing::debug!(
            anchor = plan.anchor,
            cursor_offset = plan.cursor_offset,
            error_line = plan.next.cursor_y > 0,
            erased = self.last.erase_lines,
            "render prompt"
        );
        self.last = plan.next;
        plan.cmds
    }
}

#[cfg(test)]
mod tests {
    use super::{compose_line, plan, LastRender, PromptRenderer, RenderFrame};
    use crate::core::output::{encode_all, TerminalCmd};
    use crate::core::text::ansi::strip_ansi;

    fn frame<'a>(rendered: &'a str, cursor_col: usize) -> RenderFrame<'a> {
        RenderFrame {
            message: "Name",
            rendered,
            placeholder: false,
            cursor_col,
            done: false,
            aborted: false,
            error: None,
        }
    }

    #[test]
    fn line_layout() {
        assert_eq!(strip_ansi(&compose_line(&frame("bob", 3))), "? Name › bob");
        let mut done = frame("bob", 3);
        done.done = true;
        assert_eq!(strip_ansi(&compose_line(&done)), "✔ Name … bob");
    }

    #[test]
    fn first_render_erases_one_line_and_homes_cursor() {
        let plan = plan(&frame("hello", 2), LastRender::default());
        assert_eq!(plan.cmds[0], TerminalCmd::EraseLines(1));
        assert_eq!(plan.cursor_offset, -3);
        assert_eq!(plan.cmds.last(), Some(&TerminalCmd::CursorMove(-3)));
        assert_eq!(plan.next, LastRender::default());
    }

    #[test]
    fn error_line_moves_back_to_anchor() {
        let mut with_error = frame("", 0);
        with_error.error = Some("too short");
        let plan = plan(&with_error, LastRender::default());

        // "? Name › " is nine columns.
        assert_eq!(plan.anchor, 9);
        assert_eq!(
            &plan.cmds[2..],
            &[
                TerminalCmd::CursorUp(1),
                TerminalCmd::CursorLineStart,
                TerminalCmd::CursorToColumn(9),
                TerminalCmd::CursorMove(0),
            ]
        );
        assert_eq!(
            plan.next,
            LastRender {
                erase_lines: 2,
                cursor_y: 1
            }
        );
    }

    #[test]
    fn render_after_error_steps_down_before_erasing() {
        let previous = LastRender {
            erase_lines: 2,
            cursor_y: 1,
        };
        let plan = plan(&frame("a", 1), previous);
        assert_eq!(plan.cmds[0], TerminalCmd::CursorDown(1));
        assert_eq!(plan.cmds[1], TerminalCmd::EraseLines(2));
        assert_eq!(plan.next, LastRender::default());
    }

    #[test]
    fn placeholder_offset_spans_rendered_default() {
        let mut placeholder = frame("\x1b[90m😃😃😃\x1b[39m", 1);
        placeholder.placeholder = true;
        assert_eq!(plan(&placeholder, LastRender::default()).cursor_offset, -6);
    }

    #[test]
    fn wide_glyph_offset_counts_columns() {
        assert_eq!(plan(&frame("日本", 4), LastRender::default()).cursor_offset, 0);
        assert_eq!(plan(&frame("日本", 2), LastRender::default()).cursor_offset, -2);
    }

    #[test]
    fn multi_line_error_returns_to_prompt_line() {
        let mut with_error = frame("", 0);
        with_error.error = Some("line one\nline two");
        let first = plan(&with_error, LastRender::default());
        assert_eq!(first.cmds[2], TerminalCmd::CursorUp(2));
        assert_eq!(
            first.next,
            LastRender {
                erase_lines: 3,
                cursor_y: 2
            }
        );

        let second = plan(&frame("a", 1), first.next);
        assert_eq!(second.cmds[0], TerminalCmd::CursorDown(2));
        assert_eq!(second.cmds[1], TerminalCmd::EraseLines(3));
    }

    #[test]
    fn repeated_renders_do_not_drift() {
        let mut renderer = PromptRenderer::new();
        let mut with_error = frame("abc", 1);
        with_error.error = Some("nope");

        let first = encode_all(&renderer.render(&with_error));
        let second = encode_all(&renderer.render(&with_error));
        let third = encode_all(&renderer.render(&with_error));
        assert_ne!(first, second);
        assert_eq!(second, third);
        assert!(second.ends_with("\x1b[2D"));
    }
}
