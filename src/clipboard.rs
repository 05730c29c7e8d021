//! System clipboard writes.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Clipboard handle, opened once and reused for every copy.
pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn open() -> Result<Self, ClipboardError> {
        let ctx = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx })
    }

    /// Write `text` to the clipboard.
    ///
    /// The contents are read back once so providers that serve lazily have
    /// handed the data over; the read-back copy is wiped.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("copied {} chars to clipboard", text.len());
        Ok(())
    }
}
