//! Raw keyboard mode for a tty, restored on drop.

#[cfg(unix)]
use std::os::raw::c_int;

#[cfg(unix)]
fn get_termios(fd: c_int) -> std::io::Result<libc::termios> {
    let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };
    if result != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(termios)
}

#[cfg(unix)]
fn set_termios(fd: c_int, termios: &libc::termios) -> std::io::Result<()> {
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) };
    if result != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

/// Keys arrive unbuffered and unechoed, and ctrl+c is delivered as a byte instead of a
/// signal. Output processing is left on so `\n` still returns to column 0.
#[cfg(unix)]
fn make_keyboard_raw(termios: &mut libc::termios) {
    termios.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    termios.c_oflag |= libc::ONLCR;
    termios.c_cflag |= libc::CS8;
    termios.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    termios.c_cc[libc::VMIN] = 1;
    termios.c_cc[libc::VTIME] = 0;
}

#[cfg(unix)]
pub struct RawModeGuard {
    fd: c_int,
    original: libc::termios,
}

#[cfg(unix)]
impl RawModeGuard {
    pub fn stdin() -> std::io::Result<Self> {
        Self::enable(libc::STDIN_FILENO)
    }

    pub fn enable(fd: c_int) -> std::io::Result<Self> {
        let original = get_termios(fd)?;
        let mut raw = original;
        make_keyboard_raw(&mut raw);
        set_termios(fd, &raw)?;
        tracing::debug!(fd, "raw mode enabled");
        Ok(Self { fd, original })
    }
}

#[cfg(unix)]
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = set_termios(self.fd, &self.original) {
            tracing::warn!(fd = self.fd, error = %err, "failed to restore terminal mode");
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::{make_keyboard_raw, RawModeGuard};

    #[test]
    fn keyboard_raw_keeps_output_processing() {
        let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
        termios.c_lflag = libc::ECHO | libc::ICANON | libc::ISIG;
        termios.c_iflag = libc::ICRNL;
        make_keyboard_raw(&mut termios);
        assert_eq!(termios.c_lflag & (libc::ECHO | libc::ICANON | libc::ISIG), 0);
        assert_eq!(termios.c_iflag & libc::ICRNL, 0);
        assert_ne!(termios.c_oflag & libc::ONLCR, 0);
    }

    #[test]
    fn non_tty_is_an_error() {
        let file = tempfile::tempfile().expect("tempfile");
        let fd = std::os::unix::io::AsRawFd::as_raw_fd(&file);
        assert!(RawModeGuard::enable(fd).is_err());
    }
}
