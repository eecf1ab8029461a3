//! System clipboard access for outbound links.
//!
//! On X11 and Wayland the copied text is served by the process that owns the
//! clipboard handle, so one handle is kept for the whole session instead of
//! being dropped after each copy.

use std::fmt;

use anyhow::{Context, Result};

/// Clipboard handle owned by the terminal session, connected on first use.
#[derive(Default)]
pub struct SessionClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SessionClipboard {
    /// Creates an unconnected clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None }
    }

    /// Whether a system clipboard handle is currently held.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.inner.is_some()
    }

    /// Copies `text` to the system clipboard, keeping the handle afterwards.
    pub fn copy_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("Clipboard unavailable")?);
        }
        let clipboard = self
            .inner
            .as_mut()
            .context("Clipboard unavailable")?;
        clipboard
            .set_text(text.to_owned())
            .context("Failed to copy to clipboard")?;
        Ok(())
    }
}

impl fmt::Debug for SessionClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionClipboard")
            .field("connected", &self.is_connected())
            .finish()
    }
}
