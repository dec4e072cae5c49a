//! Append-only text accumulator used by the renderer.

/// Text built up line by line and finalized once.
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append `text` followed by a newline.
    pub fn append_line(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    /// Finalize into the accumulated text.
    pub fn render(self) -> String {
        self.text
    }
}
