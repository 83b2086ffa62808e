//! System clipboard collaborators.
//!
//! The core never touches the OS clipboard itself; it talks to a
//! [`ClipboardWriter`] and receives observed texts as plain events. This
//! module provides both halves over `arboard`: a writer, and a background
//! poll loop that reports newly observed clipboard text. On a headless
//! session the clipboard may be unavailable; that degrades to a warning,
//! never a crash.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::{debug, warn};

use crate::controller::ClipboardWriter;

/// Polling interval for clipboard changes.
const POLL_INTERVAL_MS: u64 = 500;

/// Clipboard writer over the real system clipboard.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(SystemClipboard {
            inner: Clipboard::new().context("cannot open the system clipboard")?,
        })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .context("cannot write to the system clipboard")
    }
}

/// A writer that drops everything, for sessions without a usable clipboard.
pub struct NullClipboard;

impl ClipboardWriter for NullClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        debug!(len = text.len(), "no system clipboard, write dropped");
        Ok(())
    }
}

/// Start the background poll loop. Each newly observed clipboard text is
/// handed to `deliver`; the loop stops when `deliver` returns false (the
/// receiving side is gone) or when the clipboard cannot be opened at all.
pub fn spawn_poller<F>(mut deliver: F)
where
    F: FnMut(String) -> bool + Send + 'static,
{
    thread::spawn(move || {
        let mut clipboard = match Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(err) => {
                warn!(error = %err, "clipboard unavailable, polling disabled");
                return;
            }
        };
        let mut last = String::new();
        loop {
            match clipboard.get_text() {
                Ok(text) => {
                    if text != last {
                        last = text.clone();
                        if !deliver(text) {
                            return;
                        }
                    }
                }
                Err(arboard::Error::ContentNotAvailable) => {}
                Err(err) => debug!(error = %err, "clipboard read failed"),
            }
            thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        }
    });
}
