use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Records clipboard writes instead of touching the system clipboard.
#[derive(Default)]
pub struct MockClipboard {
    pub written: Vec<String>,
    pub should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { written: Vec::new(), should_fail: true }
    }

    pub fn last_written(&self) -> Option<&str> {
        self.written.last().map(String::as_str)
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::Clipboard("Mock clipboard error".to_string()));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}
