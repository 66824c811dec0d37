// Geez Sequence Buffer
// Trailing run of case-folded keystrokes still being composed

use smallvec::SmallVec;

/// Bounded run of keystroke characters.
///
/// Uses SmallVec to avoid heap allocation for the common case of short
/// combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBuffer {
    chars: SmallVec<[char; 8]>,
}

impl SequenceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Keep only the trailing `max` characters. Returns how many were dropped.
    pub fn truncate_front(&mut self, max: usize) -> usize {
        let excess = self.chars.len().saturating_sub(max);
        if excess > 0 {
            self.chars.drain(..excess);
        }
        excess
    }

    /// Remove the leading `count` characters.
    pub fn consume_front(&mut self, count: usize) {
        let count = count.min(self.chars.len());
        self.chars.drain(..count);
    }

    /// Remove the newest character.
    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    /// The leading `len` characters as a string.
    pub fn prefix(&self, len: usize) -> String {
        self.chars.iter().take(len).collect()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }
}
