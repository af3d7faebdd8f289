use arboard::Clipboard;

use super::TerminalError;

/// Port for writing to the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), TerminalError>;
}

/// Arboard-based clipboard implementation.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self, TerminalError> {
        let clipboard = Clipboard::new().map_err(|e| TerminalError::Clipboard(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), TerminalError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| TerminalError::Clipboard(e.to_string()))
    }
}

/// Used when no system clipboard is reachable (headless sessions).
pub struct UnavailableClipboard;

impl ClipboardWriter for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), TerminalError> {
        Err(TerminalError::Clipboard(
            "no system clipboard available".to_string(),
        ))
    }
}

/// Opens the system clipboard, falling back to `UnavailableClipboard`.
pub fn system_clipboard() -> Box<dyn ClipboardWriter> {
    match ArboardClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {e}");
            Box::new(UnavailableClipboard)
        }
    }
}
