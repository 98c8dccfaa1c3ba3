//! Terminal sink trait and the stock `io::Write`-backed implementation.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Append-only output sink. Writes are synchronous and ordered.
pub trait Terminal {
    fn write(&mut self, data: &str);
}

/// Terminal backed by any writer (stdout in production, a `Vec<u8>` in tests).
///
/// Write failures are logged once and then swallowed: the prompt has no way to recover a
/// broken output stream, and the host notices on its next read.
pub struct WriterTerminal<W: Write> {
    writer: W,
    write_log_path: Option<PathBuf>,
    write_log_failed: bool,
    write_failed: bool,
}

impl WriterTerminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterTerminal<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            write_log_path: None,
            write_log_failed: false,
            write_failed: false,
        }
    }

    /// Mirror every write into `path` (appending).
    pub fn with_write_log(mut self, path: Option<PathBuf>) -> Self {
        self.write_log_path = path;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn append_write_log(&mut self, data: &str) {
        if self.write_log_failed {
            return;
        }
        if let Some(path) = self.write_log_path.as_ref() {
            let result = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .and_then(|mut file| file.write_all(data.as_bytes()));
            if let Err(err) = result {
                tracing::warn!(path = %path.display(), error = %err, "disabling write log");
                self.write_log_failed = true;
            }
        }
    }
}

impl<W: Write> Terminal for WriterTerminal<W> {
    fn write(&mut self, data: &str) {
        let result = self
            .writer
            .write_all(data.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(err) = result {
            if !self.write_failed {
                tracing::error!(error = %err, "terminal write failed");
                self.write_failed = true;
            }
        }
        self.append_write_log(data);
    }
}
