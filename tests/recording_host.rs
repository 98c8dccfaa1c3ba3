#![allow(dead_code)]

use text_prompt::{PromptHost, PromptState};

/// Host double that keeps everything the prompt sends it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub output: String,
    pub changes: Vec<(String, bool, bool)>,
    pub bells: usize,
    pub closed: bool,
}

impl RecordingHost {
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl PromptHost for RecordingHost {
    fn on_change(&mut self, state: PromptState<'_>) {
        self.changes
            .push((state.value.to_string(), state.done, state.aborted));
    }

    fn write_output(&mut self, data: &str) {
        if data == "\x07" {
            self.bells += 1;
            return;
        }
        self.output.push_str(data);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
