//! Clipboard copy with two transports:
//! 1. System clipboard via `arboard`
//! 2. OSC 52 escape sequence, for sessions without a local clipboard (SSH)

use std::fmt;
use std::io::Write;

use base64::Engine;
use tracing::debug;

use crate::events::UiEvent;

#[derive(Debug)]
pub enum ClipboardError {
    System(String),
    Osc52(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::System(msg) => write!(f, "system clipboard: {msg}"),
            ClipboardError::Osc52(msg) => write!(f, "OSC 52: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

fn copy_system(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::System(e.to_string()))
}

/// Writes `ESC ] 52 ; c ; <base64> ESC \` for the terminal to intercept.
fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1b]52;c;{encoded}\x1b\\").map_err(|e| ClipboardError::Osc52(e.to_string()))?;
    stdout
        .flush()
        .map_err(|e| ClipboardError::Osc52(e.to_string()))
}

/// Copies `text` and reports the number of characters copied.
pub fn copy_to_clipboard(text: &str) -> UiEvent {
    let result = copy_system(text).or_else(|system_err| {
        debug!(%system_err, "Falling back to OSC 52");
        copy_osc52(text)
    });
    UiEvent::ClipboardResult(
        result
            .map(|()| text.chars().count())
            .map_err(|e| e.to_string()),
    )
}
