// Geez Host Output
// Destination for text produced by a composition session

/// Key name for the backspace key
pub const BACKSPACE: &str = "Backspace";

/// Destination a session writes into.
///
/// A system integration implements this with real key injection; tests and
/// the terminal front end use [`LineBuffer`].
pub trait TextSink {
    /// Delete `count` characters before the cursor
    fn delete_backward(&mut self, count: usize);

    /// Insert text at the cursor
    fn insert(&mut self, text: &str);

    /// Deliver the original key untouched
    fn forward(&mut self, key: &str);
}

/// Single line of text acting as the destination field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the line, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl TextSink for LineBuffer {
    fn delete_backward(&mut self, count: usize) {
        for _ in 0..count {
            if self.text.pop().is_none() {
                break;
            }
        }
    }

    fn insert(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn forward(&mut self, key: &str) {
        if key == BACKSPACE {
            self.text.pop();
            return;
        }
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if !ch.is_control() {
                self.text.push(ch);
            }
        }
    }
}
