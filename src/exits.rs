//! Terminal restore for signal-driven exits.
//!
//! Normal exits restore the terminal through `RawModeGuard` and
//! `terminal::reset_terminal`. A SIGTERM/SIGHUP (or a SIGINT outside raw
//! mode) would skip both, so the handler puts back the termios captured at
//! startup and leaves with `_exit`. Only async-signal-safe calls
//! (`tcsetattr`, `write`, `_exit`) run inside the handler.

use std::sync::OnceLock;

/// Shell convention for "terminated by SIGINT".
const SIGNAL_EXIT: libc::c_int = 130;

/// Reset colors and show the cursor.
const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";

/// The tty settings in effect before the form touched them.
static STARTUP_TERMIOS: OnceLock<libc::termios> = OnceLock::new();

/// Force line-buffered, echoing, signal-generating mode onto `termios`.
fn cooked(mut termios: libc::termios) -> libc::termios {
    termios.c_oflag |= libc::OPOST | libc::ONLCR;
    termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
    termios
}

fn current_termios() -> Option<libc::termios> {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        (libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0).then_some(termios)
    }
}

extern "C" fn on_terminate(_: libc::c_int) {
    unsafe {
        if let Some(termios) = STARTUP_TERMIOS.get() {
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, termios);
        }
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(
                libc::STDOUT_FILENO,
                RESTORE.as_ptr() as *const libc::c_void,
                RESTORE.len(),
            );
        }
        libc::_exit(SIGNAL_EXIT);
    }
}

/// Capture the startup tty mode and route termination signals through the
/// restore handler. Call early in main, after [`reset_terminal`].
pub fn install_handlers() {
    if let Some(termios) = current_termios() {
        let _ = STARTUP_TERMIOS.set(termios);
    }
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_terminate as *const () as libc::sighandler_t);
        }
    }
}

/// Undo a raw mode left behind by an earlier crashed run.
pub fn reset_terminal() {
    if let Some(termios) = current_termios() {
        unsafe {
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &cooked(termios));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooked_enables_line_mode_and_keeps_other_flags() {
        let mut raw: libc::termios = unsafe { std::mem::zeroed() };
        raw.c_lflag = libc::IEXTEN;
        let restored = cooked(raw);
        for flag in [libc::ICANON, libc::ECHO, libc::ISIG, libc::IEXTEN] {
            assert_ne!(restored.c_lflag & flag, 0);
        }
        assert_ne!(restored.c_oflag & libc::ONLCR, 0);
        assert_ne!(restored.c_oflag & libc::OPOST, 0);
    }

    #[test]
    fn restore_sequence_shows_cursor() {
        assert!(RESTORE.ends_with(b"\x1b[?25h"));
    }
}
