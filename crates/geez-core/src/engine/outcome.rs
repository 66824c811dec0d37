// Geez Engine Outcome
// Instructions returned to the host after each engine call

use std::fmt;

/// What the host must do after one engine call.
///
/// `backspaces` counts characters of the sequence buffer that the host is
/// assumed to have displayed raw and must now delete before writing `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Text to inject (a grapheme or a literal character); may be empty
    pub text: String,
    /// The key was used by the engine and must not reach the destination
    pub consumed: bool,
    /// Characters to delete before injecting `text`
    pub backspaces: Option<usize>,
}

impl KeyOutcome {
    /// Key ignored or held back; nothing to emit.
    pub fn pass() -> Self {
        Self::default()
    }

    /// A pending match committed by the timeout check.
    pub fn flushed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            consumed: true,
            backspaces: None,
        }
    }

    /// A buffer resolved to a grapheme or literal character.
    pub fn resolved(text: impl Into<String>, backspaces: usize) -> Self {
        Self {
            text: text.into(),
            consumed: false,
            backspaces: Some(backspaces),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.text.is_empty() && !self.consumed && self.backspaces.is_none()
    }

    /// Whether the host should withhold the original keystroke.
    pub fn suppresses_key(&self) -> bool {
        self.consumed || !self.text.is_empty()
    }
}

/// Composition state derived from the buffer and pending slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Empty buffer, nothing pending
    Idle,
    /// Buffer holds keystrokes without a completed match
    Accumulating,
    /// Buffer holds an exact key whose grapheme is waiting to be committed
    PendingExact,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Idle => write!(f, "idle"),
            EngineState::Accumulating => write!(f, "accumulating"),
            EngineState::PendingExact => write!(f, "pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_is_noop() {
        let outcome = KeyOutcome::pass();
        assert!(outcome.is_noop());
        assert!(!outcome.suppresses_key());
    }

    #[test]
    fn test_flushed_suppresses() {
        let outcome = KeyOutcome::flushed("ሀ");
        assert!(outcome.consumed);
        assert_eq!(outcome.backspaces, None);
        assert!(outcome.suppresses_key());
    }

    #[test]
    fn test_resolved_carries_backspaces() {
        let outcome = KeyOutcome::resolved("ሎ", 2);
        assert!(!outcome.consumed);
        assert_eq!(outcome.backspaces, Some(2));
        assert!(outcome.suppresses_key());
    }
}
