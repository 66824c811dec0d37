// Geez Transliteration Engine
// Bounded-lookahead, longest-match composition over a live keystroke stream
//
// Every call is synchronous and deterministic given (state, key, timestamp).
// The engine owns no timer: elapsed time is derived only from the `Instant`
// handed in by the caller.

mod buffer;
mod outcome;

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use strum_macros::{Display, EnumString};

use crate::table::{fold_char, MappingTable, TableLookup};

pub use buffer::SequenceBuffer;
pub use outcome::{EngineState, KeyOutcome};

/// Default inactivity window before a pending match is flushed
pub const DEFAULT_SEQUENCE_TIMEOUT: Duration = Duration::from_millis(250);

/// Default ceiling on buffered keystrokes
pub const DEFAULT_MAX_COMBO_LENGTH: usize = 4;

/// Engine configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Sequence timeout must be greater than zero")]
    NonPositiveTimeout,

    #[error("Maximum combination length must be at least 1")]
    ZeroComboLength,
}

/// Which keys the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum KeyPolicy {
    /// Single alphabetic characters only
    #[default]
    Alphabetic,
    /// Alphabetic characters plus symbols used by some table key
    /// (apostrophe, `:`, `.`)
    Extended,
}

/// Configuration for the transliteration engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Inactivity window after which a pending match is flushed
    pub sequence_timeout: Duration,
    /// Maximum number of buffered keystrokes
    pub max_combo_length: usize,
    /// Key acceptance gate
    pub key_policy: KeyPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sequence_timeout: DEFAULT_SEQUENCE_TIMEOUT,
            max_combo_length: DEFAULT_MAX_COMBO_LENGTH,
            key_policy: KeyPolicy::Alphabetic,
        }
    }
}

impl EngineConfig {
    /// Create a validated configuration
    pub fn new(sequence_timeout: Duration, max_combo_length: usize) -> Result<Self, ConfigError> {
        let config = Self {
            sequence_timeout,
            max_combo_length,
            key_policy: KeyPolicy::Alphabetic,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence_timeout.is_zero() {
            return Err(ConfigError::NonPositiveTimeout);
        }
        if self.max_combo_length < 1 {
            return Err(ConfigError::ZeroComboLength);
        }
        Ok(())
    }
}

/// Incremental Latin-to-Ge'ez transliteration engine.
///
/// One instance per composition stream. The mapping table is shared and
/// read-only; the buffer, pending match and last keystroke time are private
/// to the instance.
#[derive(Debug, Clone)]
pub struct TransliterationEngine {
    table: Arc<MappingTable>,
    config: EngineConfig,
    buffer: SequenceBuffer,
    pending: Option<String>,
    last_keystroke: Option<Instant>,
}

impl TransliterationEngine {
    /// Create an engine, rejecting invalid configuration up front
    pub fn new(table: Arc<MappingTable>, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table,
            config,
            buffer: SequenceBuffer::new(),
            pending: None,
            last_keystroke: None,
        })
    }

    /// Create an engine with the default timeout and combination length
    pub fn with_defaults(table: Arc<MappingTable>) -> Self {
        Self {
            table,
            config: EngineConfig::default(),
            buffer: SequenceBuffer::new(),
            pending: None,
            last_keystroke: None,
        }
    }

    /// Whether the engine handles this key at all.
    ///
    /// Anything rejected here must be forwarded untouched by the caller.
    pub fn should_process_key(&self, key: &str) -> bool {
        self.accept(key).is_some()
    }

    fn accept(&self, key: &str) -> Option<char> {
        let mut chars = key.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if ch.is_alphabetic() {
            return Some(ch);
        }
        match self.config.key_policy {
            KeyPolicy::Extended
                if !ch.is_whitespace() && !ch.is_control() && self.table.uses_symbol(ch) =>
            {
                Some(ch)
            }
            _ => None,
        }
    }

    /// Process a single keystroke observed at `now`.
    pub fn process_key(&mut self, key: &str, now: Instant) -> KeyOutcome {
        let Some(ch) = self.accept(key) else {
            log::trace!("Ignoring key {:?}", key);
            return KeyOutcome::pass();
        };

        // A flush consumes this call; the key is not folded into the new state.
        if let Some(text) = self.take_expired_pending(now) {
            log::debug!("Timeout flush of {:?} before key {:?}", text, key);
            return KeyOutcome::flushed(text);
        }

        self.buffer.push(fold_char(ch));
        self.last_keystroke = Some(now);

        let dropped = self.buffer.truncate_front(self.config.max_combo_length);
        if dropped > 0 {
            log::trace!("Dropped {} leading keystroke(s) from the buffer", dropped);
        }

        let sequence = self.buffer.as_string();
        match self.table.lookup(&sequence) {
            TableLookup::Exact(grapheme) | TableLookup::ExactAndPrefix(grapheme) => {
                log::trace!("Exact match {:?} -> {:?}, holding", sequence, grapheme);
                self.pending = Some(grapheme.to_string());
                KeyOutcome::pass()
            }
            TableLookup::Prefix => {
                log::trace!("Sequence {:?} may still extend, waiting", sequence);
                KeyOutcome::pass()
            }
            TableLookup::Miss if self.buffer.len() > 1 => self.resolve(),
            TableLookup::Miss => {
                // A lone unmatched character waits for the next key
                log::trace!("Holding unmatched {:?}", sequence);
                self.pending = None;
                KeyOutcome::pass()
            }
        }
    }

    /// Run only the timeout check, without a keystroke.
    ///
    /// Hosts call this periodically to flush a pending match after real
    /// inactivity rather than on the next key.
    pub fn tick(&mut self, now: Instant) -> KeyOutcome {
        match self.take_expired_pending(now) {
            Some(text) => {
                log::debug!("Idle flush of {:?}", text);
                KeyOutcome::flushed(text)
            }
            None => KeyOutcome::pass(),
        }
    }

    /// Commit the whole composition immediately, regardless of time.
    ///
    /// The buffer is drained greedily by longest matching prefix; characters
    /// that start no key are emitted literally.
    pub fn commit(&mut self) -> KeyOutcome {
        if self.buffer.is_empty() {
            self.pending = None;
            return KeyOutcome::pass();
        }

        let mut text = String::new();
        while !self.buffer.is_empty() {
            let (piece, len) = self
                .longest_key_prefix(self.buffer.len())
                .unwrap_or_else(|| (self.buffer.prefix(1), 1));
            text.push_str(&piece);
            self.buffer.consume_front(len);
        }
        self.pending = None;
        log::debug!("Committed composition as {:?}", text);
        KeyOutcome::flushed(text)
    }

    /// Remove the newest buffered keystroke, as if it had never been typed.
    ///
    /// The held match becomes whatever the shortened buffer maps to, if
    /// anything. Returns false when the buffer was already empty.
    pub fn retract(&mut self) -> bool {
        if self.buffer.pop().is_none() {
            return false;
        }
        self.pending = self
            .table
            .get(&self.buffer.as_string())
            .map(str::to_string);
        if self.buffer.is_empty() {
            self.last_keystroke = None;
        }
        log::trace!("Retracted keystroke, {:?} left", self.buffer.as_string());
        true
    }

    /// Drop the composition without emitting anything.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.pending = None;
        self.last_keystroke = None;
    }

    /// No exact match and no extension on a buffer of two or more characters:
    /// commit the longest proper prefix that is a key, or the first character
    /// literally.
    fn resolve(&mut self) -> KeyOutcome {
        let proper = self.buffer.len().saturating_sub(1);
        let (text, len) = self
            .longest_key_prefix(proper)
            .unwrap_or_else(|| (self.buffer.prefix(1), 1));

        self.buffer.consume_front(len);
        self.pending = None;
        log::trace!(
            "Resolved {:?} retracting {} character(s), {:?} left",
            text,
            len,
            self.buffer.as_string()
        );
        KeyOutcome::resolved(text, len)
    }

    /// Longest buffer prefix of at most `max_len` characters that is a key.
    fn longest_key_prefix(&self, max_len: usize) -> Option<(String, usize)> {
        (1..=max_len).rev().find_map(|len| {
            self.table
                .get(&self.buffer.prefix(len))
                .map(|grapheme| (grapheme.to_string(), len))
        })
    }

    fn take_expired_pending(&mut self, now: Instant) -> Option<String> {
        if self.buffer.is_empty() || !self.is_expired(now) {
            return None;
        }
        match self.pending.take() {
            Some(text) => {
                self.buffer.clear();
                Some(text)
            }
            None => {
                // Incomplete run with no match: kept, and the next key joins it.
                log::trace!("Stale buffer {:?} retained", self.buffer.as_string());
                None
            }
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        match self.last_keystroke {
            Some(last) => now.saturating_duration_since(last) > self.config.sequence_timeout,
            None => true,
        }
    }

    pub fn state(&self) -> EngineState {
        match (self.buffer.is_empty(), self.pending.is_some()) {
            (true, _) => EngineState::Idle,
            (false, false) => EngineState::Accumulating,
            (false, true) => EngineState::PendingExact,
        }
    }

    /// Current buffered keystrokes
    pub fn buffer(&self) -> String {
        self.buffer.as_string()
    }

    /// Grapheme held back for the current exact match, if any
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &Arc<MappingTable> {
        &self.table
    }
}
