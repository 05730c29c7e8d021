use crossterm::event::{Event, KeyEvent, KeyEventKind, read};

use crate::terminal::RawModeGuard;

/// Block until a key is pressed. `None` if the terminal cannot be read.
pub fn read_key() -> Option<KeyEvent> {
    let _guard = RawModeGuard::new().ok()?;

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
            Ok(_) => {}
            Err(e) => {
                log::debug!("terminal read failed: {e}");
                return None;
            }
        }
    }
}
