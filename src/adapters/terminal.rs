//! Terminal mode snapshot, restored when a prompt is abandoned mid-read.

use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal};
use std::mem::MaybeUninit;
use std::os::fd::{AsRawFd, RawFd};

use dialoguer::console::Term;
use tracing::debug;

/// Line settings of the controlling terminal as they were at startup.
pub struct TerminalState {
    fd: RawFd,
    saved: libc::termios,
    // Keeps `fd` open when it came from /dev/tty.
    _tty: Option<File>,
}

impl TerminalState {
    /// Snapshot the terminal prompts read from: stdin when it is a terminal,
    /// otherwise `/dev/tty`. `None` without a controlling terminal.
    pub fn capture() -> Option<Self> {
        let (fd, tty) = if io::stdin().is_terminal() {
            (libc::STDIN_FILENO, None)
        } else {
            let tty = OpenOptions::new().read(true).write(true).open("/dev/tty").ok()?;
            (tty.as_raw_fd(), Some(tty))
        };

        let mut saved = MaybeUninit::<libc::termios>::uninit();
        // SAFETY: `fd` is open for the duration of the call and `saved` is
        // valid for writes of one `termios`.
        if unsafe { libc::tcgetattr(fd, saved.as_mut_ptr()) } != 0 {
            debug!(error = %io::Error::last_os_error(), "terminal state unavailable");
            return None;
        }
        // SAFETY: tcgetattr succeeded and initialised `saved`.
        let saved = unsafe { saved.assume_init() };
        Some(Self { fd, saved, _tty: tty })
    }

    /// Put the line settings back and make the cursor visible again.
    pub fn restore(&self) -> io::Result<()> {
        // SAFETY: `fd` stays open while `self` lives; `saved` came from tcgetattr.
        if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &self.saved) } != 0 {
            return Err(io::Error::last_os_error());
        }
        let term = Term::stderr();
        if term.is_term() { term.show_cursor() } else { Ok(()) }
    }
}
