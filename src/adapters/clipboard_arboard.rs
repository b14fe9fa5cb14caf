use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard, opened on first write so commands
/// that never copy do not need a display connection.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            let opened = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
            self.clipboard = Some(opened);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::Clipboard("clipboard unavailable".to_string()))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.handle()?.set_text(text).map_err(|e| AppError::Clipboard(e.to_string()))
    }
}
