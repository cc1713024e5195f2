//! System clipboard access.

use crate::assist::AssistError;

/// Reads the current clipboard text.
pub fn read_text() -> Result<String, AssistError> {
    let mut clipboard = open()?;
    clipboard
        .get_text()
        .map_err(|e| AssistError::MissingCapability(format!("Error reading clipboard: {e}")))
}

/// Replaces the clipboard contents with `text`.
pub fn write_text(text: &str) -> Result<(), AssistError> {
    let mut clipboard = open()?;
    clipboard
        .set_text(text)
        .map_err(|e| AssistError::MissingCapability(format!("Error writing clipboard: {e}")))
}

fn open() -> Result<arboard::Clipboard, AssistError> {
    arboard::Clipboard::new().map_err(|e| {
        AssistError::MissingCapability(format!(
            "Clipboard is not available ({e}). Pass the text as an argument, \
             with --file, or through stdin instead."
        ))
    })
}
