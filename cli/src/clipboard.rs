//! Copy-to-clipboard action.
//!
//! A failed write is reported back as a `Notice` and never aborts the run;
//! the command has already been printed by then.

use std::fmt;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

/// Anything that can receive the copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard.
///
/// On Linux the selection is served by the process that set it, so the copy
/// blocks until another client takes ownership. Elsewhere it returns at once.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| anyhow!("failed to access clipboard: {e}"))?;
        write_text(&mut clipboard, text).map_err(|e| anyhow!("failed to copy to clipboard: {e}"))
    }
}

#[cfg(target_os = "linux")]
fn write_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn write_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Transient, user-facing outcome of a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied,
    Failed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Copied => write!(f, "The curl command has been copied to your clipboard!"),
            Notice::Failed(_) => write!(f, "Failed to copy to clipboard. Please try again."),
        }
    }
}

/// Copy `text` into `sink` and report how it went.
pub fn export(sink: &mut dyn ClipboardSink, text: &str) -> Notice {
    match sink.set_text(text) {
        Ok(()) => {
            info!(bytes = text.len(), "copied_to_clipboard");
            Notice::Copied
        }
        Err(e) => {
            warn!(error = %e, "clipboard_write_failed");
            Notice::Failed(e.to_string())
        }
    }
}
