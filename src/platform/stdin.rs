//! Stdin reader that reports a quiet period after a cut-off escape sequence.

use std::io::{self, ErrorKind, Read};
use std::os::raw::c_int;
use std::time::Duration;

use crate::core::input::incomplete_escape_tail;

/// How long a lone `ESC` waits for the rest of a sequence before it counts as the escape key.
pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(10);

const RECENT_LIMIT: usize = 32;

/// Blocking reader over a terminal fd.
///
/// While the bytes returned so far end in an unfinished escape sequence, the next read waits
/// at most the escape timeout and fails with `ErrorKind::TimedOut` if nothing arrives.
/// Otherwise reads block as usual.
pub struct PolledStdin {
    fd: c_int,
    escape_timeout: Duration,
    recent: String,
}

impl PolledStdin {
    pub fn new() -> Self {
        Self::from_fd(libc::STDIN_FILENO)
    }

    pub fn from_fd(fd: c_int) -> Self {
        Self {
            fd,
            escape_timeout: DEFAULT_ESCAPE_TIMEOUT,
            recent: String::new(),
        }
    }

    pub fn with_escape_timeout(mut self, timeout: Duration) -> Self {
        self.escape_timeout = timeout;
        self
    }

    fn wait_readable(&self) -> io::Result<bool> {
        let mut pollfd = libc::pollfd {
            fd: self.fd,
            events: libc::POLLIN,
            revents: 0,
        };
        let timeout_ms = self.escape_timeout.as_millis().min(c_int::MAX as u128) as c_int;
        let ready = unsafe { libc::poll(&mut pollfd, 1, timeout_ms) };
        if ready < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(ready > 0)
    }

    fn remember(&mut self, data: &[u8]) {
        self.recent.push_str(&String::from_utf8_lossy(data));
        if self.recent.len() > RECENT_LIMIT {
            let mut cut = self.recent.len() - RECENT_LIMIT;
            while !self.recent.is_char_boundary(cut) {
                cut += 1;
            }
            self.recent.drain(..cut);
        }
    }
}

impl Default for PolledStdin {
    fn default() -> Self {
        Self::new()
    }
}

impl Read for PolledStdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if incomplete_escape_tail(&self.recent) > 0 && !self.wait_readable()? {
            self.recent.clear();
            return Err(io::Error::from(ErrorKind::TimedOut));
        }
        let read = unsafe { libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len()) };
        if read < 0 {
            return Err(io::Error::last_os_error());
        }
        let read = read as usize;
        self.remember(&buf[..read]);
        Ok(read)
    }
}
