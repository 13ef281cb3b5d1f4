//! Copy event reports to the system clipboard.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::models::TimelineEvent;

/// Upper bound for copied text (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Clipboard sink (mocked in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard(Clipboard);

impl SystemClipboard {
    fn open() -> Result<Self> {
        Clipboard::new().map(Self).context("Failed to initialize clipboard")
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0.set_text(text).context("Failed to set clipboard contents")
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }
    Ok(())
}

fn copy_with(provider: &mut dyn ClipboardProvider, text: &str) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)
}

/// Copy text to the system clipboard
///
/// Validation runs before the clipboard is opened, so empty or oversized text fails the same
/// way on headless machines.
///
/// # Errors
/// - empty text, or text over 10MB
/// - no clipboard available (headless session, missing X11/Wayland support)
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    validate_clipboard_text(text)?;
    copy_with(&mut SystemClipboard::open()?, text)
}

/// Copy the plain-text report of one timeline event
pub fn copy_event_report(event: &TimelineEvent) -> Result<()> {
    copy_to_clipboard(&event.report())
}
