use std::time::{Duration, Instant};

use geez_core::{InputMode, LineBuffer, Session};

/// Floor for the idle poll interval
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);

pub struct Editor {
    pub session: Session,
    pub line: LineBuffer,
    /// Lines submitted with Enter, oldest first
    pub submitted: Vec<String>,
    pub status: String,
}

impl Editor {
    pub fn new(session: Session) -> Self {
        let status = format!("Typing in {}", session.mode());
        Self {
            session,
            line: LineBuffer::new(),
            submitted: Vec::new(),
            status,
        }
    }

    /// How long the event loop may block before running an idle check.
    pub fn tick_interval(&self) -> Duration {
        let timeout = self.session.engine().config().sequence_timeout;
        (timeout / 2).max(MIN_TICK_INTERVAL)
    }

    pub fn key(&mut self, name: &str, now: Instant) {
        self.session.handle_key(name, now, &mut self.line);
    }

    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now, &mut self.line);
    }

    pub fn submit(&mut self) {
        self.session.commit(&mut self.line);
        let text = self.line.take();
        log::debug!("Submitted line {:?}", text);
        self.submitted.push(text);
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
        self.set_status("Composition discarded");
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.session.set_mode(mode);
        self.set_status(format!("Typing in {}", mode));
    }

    pub fn toggle_active(&mut self) {
        if self.session.toggle_active() {
            self.set_status(format!("Typing in {}", self.session.mode()));
        } else {
            self.set_status("Conversion off");
        }
    }

    pub fn mode_label(&self) -> String {
        if self.session.is_active() {
            self.session.mode().to_string()
        } else {
            "off".to_string()
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Commit whatever is still open and hand back every line.
    pub fn finish(mut self) -> Vec<String> {
        self.session.commit(&mut self.line);
        if !self.line.is_empty() {
            let text = self.line.take();
            self.submitted.push(text);
        }
        self.submitted
    }
}
