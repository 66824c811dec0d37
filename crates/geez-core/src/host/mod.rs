// Geez Host Session
// Reference host adapter: routes keys through the engine and applies its
// instructions to a text destination

mod sink;

use std::time::{Duration, Instant};

use serde::Deserialize;
use strum_macros::{Display, EnumString};

use crate::engine::{EngineState, KeyOutcome, TransliterationEngine};
use crate::mode::InputMode;

pub use sink::{LineBuffer, TextSink, BACKSPACE};

/// What happened to the original keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Delivered to the destination untouched
    Forwarded,
    /// Withheld; the session wrote its own output instead
    Suppressed,
}

/// How keystrokes under composition are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Echo {
    /// Composing keystrokes stay out of the destination; the host shows
    /// them separately and only resolved text is written.
    #[default]
    Preedit,
    /// Composing keystrokes are forwarded as typed and replaced in place
    /// once they resolve.
    Raw,
}

/// One composition stream bound to a destination.
#[derive(Debug, Clone)]
pub struct Session {
    engine: TransliterationEngine,
    mode: InputMode,
    active: bool,
    echo: Echo,
    replay_after_flush: bool,
    /// Raw keystrokes written to the destination that are still buffered.
    /// Always zero in preedit echo.
    shown: usize,
}

impl Session {
    pub fn new(engine: TransliterationEngine, mode: InputMode) -> Self {
        Self {
            engine,
            mode,
            active: true,
            echo: Echo::default(),
            replay_after_flush: true,
            shown: 0,
        }
    }

    pub fn with_echo(mut self, echo: Echo) -> Self {
        self.echo = echo;
        self
    }

    /// When off, a key that triggered a timeout flush is dropped instead of
    /// being presented to the engine a second time.
    pub fn with_replay_after_flush(mut self, replay: bool) -> Self {
        self.replay_after_flush = replay;
        self
    }

    fn transliterating(&self) -> bool {
        self.active && self.mode.transliterates()
    }

    /// Route one keystroke.
    pub fn handle_key<S: TextSink>(&mut self, key: &str, now: Instant, sink: &mut S) -> Delivery {
        if !self.transliterating() {
            sink.forward(key);
            return Delivery::Forwarded;
        }
        if key == BACKSPACE && self.engine.state() != EngineState::Idle {
            return self.retract(sink);
        }
        if !self.engine.should_process_key(key) {
            // Finish the composition so it lands before the key.
            self.commit(sink);
            sink.forward(key);
            return Delivery::Forwarded;
        }

        let mut outcome = self.engine.process_key(key, now);
        if outcome.consumed {
            self.settle(&outcome.text, sink);
            if !self.replay_after_flush {
                log::trace!("Dropping key {:?} after flush", key);
                return Delivery::Suppressed;
            }
            log::trace!("Replaying key {:?} after flush", key);
            outcome = self.engine.process_key(key, now);
        }
        self.deliver(key, &outcome, sink)
    }

    /// Idle check; returns true when something was written.
    pub fn tick<S: TextSink>(&mut self, now: Instant, sink: &mut S) -> bool {
        let outcome = self.engine.tick(now);
        if !outcome.consumed {
            return false;
        }
        self.settle(&outcome.text, sink);
        true
    }

    /// Write out the current composition immediately.
    pub fn commit<S: TextSink>(&mut self, sink: &mut S) {
        let outcome = self.engine.commit();
        if outcome.consumed {
            self.settle(&outcome.text, sink);
        }
    }

    /// Abandon the current composition. Raw keystrokes already written stay.
    pub fn cancel(&mut self) {
        self.engine.reset();
        self.shown = 0;
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        if mode != self.mode {
            log::info!("Input mode changed: {} -> {}", self.mode, mode);
            self.cancel();
            self.mode = mode;
        }
    }

    /// Toggle conversion on or off. Returns the new state.
    pub fn toggle_active(&mut self) -> bool {
        self.active = !self.active;
        self.cancel();
        log::info!("Input method {}", if self.active { "enabled" } else { "disabled" });
        self.active
    }

    /// Replace the whole composition with `text`.
    fn settle<S: TextSink>(&mut self, text: &str, sink: &mut S) {
        if self.shown > 0 {
            sink.delete_backward(self.shown);
            self.shown = 0;
        }
        if !text.is_empty() {
            sink.insert(text);
        }
    }

    /// Apply the outcome of the key itself.
    fn deliver<S: TextSink>(&mut self, key: &str, outcome: &KeyOutcome, sink: &mut S) -> Delivery {
        match self.echo {
            Echo::Preedit => {
                if !outcome.text.is_empty() {
                    sink.insert(&outcome.text);
                }
                Delivery::Suppressed
            }
            Echo::Raw if outcome.backspaces.is_some() => {
                // The engine counts buffer characters, including the key just
                // pressed and any the destination never saw. Only the earlier
                // raw keys that survived truncation are on screen.
                let max = self.engine.config().max_combo_length;
                sink.delete_backward(self.shown.min(max.saturating_sub(1)));
                sink.insert(&outcome.text);
                let rest = self.engine.buffer();
                sink.insert(&rest);
                self.shown = rest.chars().count();
                Delivery::Suppressed
            }
            Echo::Raw => {
                sink.forward(key);
                // Characters pushed out by truncation stay on screen as typed
                self.shown = self.engine.buffer().chars().count();
                Delivery::Forwarded
            }
        }
    }

    /// Backspace while composing edits the composition, not the destination.
    fn retract<S: TextSink>(&mut self, sink: &mut S) -> Delivery {
        self.engine.retract();
        match self.echo {
            Echo::Preedit => Delivery::Suppressed,
            Echo::Raw => {
                sink.forward(BACKSPACE);
                self.shown = self.shown.saturating_sub(1);
                Delivery::Forwarded
            }
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn echo(&self) -> Echo {
        self.echo
    }

    /// Keystrokes still being composed (shown as preedit)
    pub fn preedit(&self) -> String {
        self.engine.buffer()
    }

    pub fn engine(&self) -> &TransliterationEngine {
        &self.engine
    }
}

/// Type `text` into a fresh line, one key every `key_interval` from `start`,
/// then let the session go idle and commit what is left.
pub fn transliterate_text(
    session: &mut Session,
    text: &str,
    start: Instant,
    key_interval: Duration,
) -> String {
    let mut line = LineBuffer::new();
    let mut now = start;
    for ch in text.chars() {
        let key = ch.to_string();
        session.handle_key(&key, now, &mut line);
        now += key_interval;
    }

    let idle = now + session.engine().config().sequence_timeout + Duration::from_millis(1);
    session.tick(idle, &mut line);
    session.commit(&mut line);
    line.take()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MappingTable;

    fn session() -> Session {
        let engine = TransliterationEngine::with_defaults(MappingTable::builtin());
        Session::new(engine, InputMode::Tigrinya)
    }

    fn ms(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn test_preedit_holds_composition() {
        let mut session = session();
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        assert_eq!(session.handle_key("s", t0, &mut line), Delivery::Suppressed);
        assert_eq!(line.text(), "");
        assert_eq!(session.preedit(), "s");
    }

    #[test]
    fn test_non_engine_key_commits_first() {
        let mut session = session();
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        session.handle_key("s", t0, &mut line);
        session.handle_key("a", ms(t0, 20), &mut line);
        assert_eq!(session.handle_key(" ", ms(t0, 40), &mut line), Delivery::Forwarded);
        assert_eq!(line.text(), "ሳ ");
        assert_eq!(session.preedit(), "");
    }

    #[test]
    fn test_flush_replays_key() {
        let mut session = session();
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        session.handle_key("h", t0, &mut line);
        session.handle_key("x", ms(t0, 1_000), &mut line);
        assert_eq!(line.text(), "ሀ");
        assert_eq!(session.preedit(), "x");
        assert_eq!(session.engine().pending(), Some("ኀ"));
    }

    #[test]
    fn test_flush_without_replay_drops_key() {
        let mut session = session().with_replay_after_flush(false);
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        session.handle_key("h", t0, &mut line);
        assert_eq!(session.handle_key("x", ms(t0, 1_000), &mut line), Delivery::Suppressed);
        assert_eq!(line.text(), "ሀ");
        assert_eq!(session.preedit(), "");
    }

    fn raw_session() -> Session {
        session().with_echo(Echo::Raw)
    }

    #[test]
    fn test_raw_echo_replaces_resolved_keys_in_place() {
        let mut session = raw_session();
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        assert_eq!(session.handle_key("z", t0, &mut line), Delivery::Forwarded);
        assert_eq!(line.text(), "z");
        // "zz" resolves to the "z" prefix; the second "z" stays raw
        assert_eq!(session.handle_key("z", ms(t0, 20), &mut line), Delivery::Suppressed);
        assert_eq!(line.text(), "ዘz");
        assert_eq!(session.preedit(), "z");
    }

    #[test]
    fn test_raw_echo_keeps_existing_text() {
        let mut session = raw_session();
        let mut line = LineBuffer::new();
        line.insert("12");

        session.handle_key("v", Instant::now(), &mut line);
        assert_eq!(line.text(), "12v");
        assert_eq!(session.preedit(), "v");
    }

    #[test]
    fn test_raw_echo_never_erases_committed_text() {
        let mut session = raw_session();
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        session.handle_key("h", t0, &mut line);
        session.handle_key("v", ms(t0, 10), &mut line);
        assert_eq!(line.text(), "ሀv");
        session.handle_key("a", ms(t0, 20), &mut line);
        assert_eq!(line.text(), "ሀva");

        session.commit(&mut line);
        assert_eq!(line.text(), "ሀvአ");
    }

    #[test]
    fn test_raw_echo_flush_replaces_raw_keys() {
        let mut session = raw_session();
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        session.handle_key("h", t0, &mut line);
        assert_eq!(line.text(), "h");
        session.handle_key("x", ms(t0, 1_000), &mut line);
        assert_eq!(line.text(), "ሀx");

        assert!(session.tick(ms(t0, 2_000), &mut line));
        assert_eq!(line.text(), "ሀኀ");
    }

    #[test]
    fn test_raw_echo_leaves_truncated_keys_as_typed() {
        let table = MappingTable::from_entries([("abcdx", "?"), ("b", "B")]);
        let engine = TransliterationEngine::with_defaults(std::sync::Arc::new(table));
        let mut session = Session::new(engine, InputMode::Tigrinya).with_echo(Echo::Raw);
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        for (i, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
            session.handle_key(key, ms(t0, i as u64 * 10), &mut line);
        }
        assert_eq!(line.text(), "aBcde");
        assert_eq!(session.preedit(), "cde");
    }

    #[test]
    fn test_raw_echo_commits_before_other_keys() {
        let mut session = raw_session();
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        session.handle_key("s", t0, &mut line);
        session.handle_key("a", ms(t0, 10), &mut line);
        assert_eq!(line.text(), "sa");
        assert_eq!(session.handle_key(" ", ms(t0, 20), &mut line), Delivery::Forwarded);
        assert_eq!(line.text(), "ሳ ");
    }

    #[test]
    fn test_raw_echo_backspace_removes_raw_key() {
        let mut session = raw_session();
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        session.handle_key("q", t0, &mut line);
        session.handle_key("w", ms(t0, 10), &mut line);
        assert_eq!(session.handle_key(BACKSPACE, ms(t0, 20), &mut line), Delivery::Forwarded);
        assert_eq!(line.text(), "q");
        assert_eq!(session.preedit(), "q");
    }

    #[test]
    fn test_backspace_trims_preedit() {
        let mut session = session();
        let mut line = LineBuffer::new();
        line.insert("ሰ");
        let t0 = Instant::now();

        for (i, key) in ["q", "w", "a"].into_iter().enumerate() {
            session.handle_key(key, ms(t0, i as u64 * 10), &mut line);
        }
        assert_eq!(session.handle_key(BACKSPACE, ms(t0, 30), &mut line), Delivery::Suppressed);
        assert_eq!(session.preedit(), "qw");
        assert_eq!(line.text(), "ሰ");

        session.commit(&mut line);
        assert_eq!(line.text(), "ሰቍ");
    }

    #[test]
    fn test_backspace_when_idle_reaches_destination() {
        let mut session = session();
        let mut line = LineBuffer::new();
        line.insert("ሰላ");

        assert_eq!(
            session.handle_key(BACKSPACE, Instant::now(), &mut line),
            Delivery::Forwarded
        );
        assert_eq!(line.text(), "ሰ");
    }

    #[test]
    fn test_latin_mode_forwards_everything() {
        let mut session = session();
        session.set_mode(InputMode::Latin);
        let mut line = LineBuffer::new();
        let t0 = Instant::now();

        for (i, key) in ["h", "e", "y"].into_iter().enumerate() {
            assert_eq!(
                session.handle_key(key, ms(t0, i as u64 * 20), &mut line),
                Delivery::Forwarded
            );
        }
        assert_eq!(line.text(), "hey");
    }

    #[test]
    fn test_mode_change_resets_composition() {
        let mut session = session();
        let mut line = LineBuffer::new();
        session.handle_key("s", Instant::now(), &mut line);
        session.set_mode(InputMode::Amharic);
        assert_eq!(session.preedit(), "");
        assert_eq!(session.mode(), InputMode::Amharic);
    }

    #[test]
    fn test_toggle_active() {
        let mut session = session();
        let mut line = LineBuffer::new();
        assert!(!session.toggle_active());
        session.handle_key("s", Instant::now(), &mut line);
        assert_eq!(line.text(), "s");
        assert!(session.toggle_active());
    }

    #[test]
    fn test_cancel_discards_preedit() {
        let mut session = session();
        let mut line = LineBuffer::new();
        session.handle_key("s", Instant::now(), &mut line);
        session.cancel();
        session.commit(&mut line);
        assert_eq!(line.text(), "");
    }

    #[test]
    fn test_transliterate_text() {
        let mut session = session();
        let out = transliterate_text(
            &mut session,
            "hello",
            Instant::now(),
            Duration::from_millis(50),
        );
        assert_eq!(out, "ሄለሎ");
    }
}
