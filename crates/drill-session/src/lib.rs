//! Stateful typing session hosting one challenge at a time.
//!
//! `TypingSession` owns the current challenge and processes each keystroke,
//! returning responses the game frontend turns into feedback, display updates
//! and round transitions. Each player owns their own session.

pub(crate) mod types;

mod key_handlers;
mod response;

#[cfg(test)]
mod tests;

use rand::Rng;
use tracing::{debug, warn};

use drill_core::matcher::{OperatingSystem, TypingMatcher};
use drill_core::settings::Settings;
use drill_core::textbank::{Level, TextBank, TypingText};

pub use types::{ChallengeOutcome, ChallengeStats, KeyEvent, KeyResponse, TypingDisplay};

use types::{Challenge, SessionState};

pub struct TypingSession {
    os: OperatingSystem,
    /// `None` = unlimited.
    max_mistakes: Option<u32>,
    state: SessionState,
}

impl TypingSession {
    pub fn new(os: OperatingSystem) -> Self {
        Self {
            os,
            max_mistakes: None,
            state: SessionState::Idle,
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let mut session = Self::new(settings.typing.os);
        session.max_mistakes = settings.session.mistake_limit();
        session
    }

    pub fn set_max_mistakes(&mut self, limit: Option<u32>) {
        self.max_mistakes = limit.filter(|&n| n > 0);
    }

    pub fn os(&self) -> OperatingSystem {
        self.os
    }

    pub fn is_typing(&self) -> bool {
        matches!(self.state, SessionState::Typing(_))
    }

    /// Begin a challenge on `text`, replacing any challenge in progress.
    ///
    /// Returns `None` and stays idle when the reading yields no romaji.
    pub fn start(&mut self, text: TypingText) -> Option<TypingDisplay> {
        let matcher = TypingMatcher::from_kana(&text.kana, self.os);
        if matcher.buffer().is_empty() {
            warn!(title = %text.title, "text has nothing to type");
            self.state = SessionState::Idle;
            return None;
        }
        if self.is_typing() {
            debug!("replacing challenge in progress");
        }
        debug!(title = %text.title, romaji_len = matcher.buffer().len(), "challenge started");
        let challenge = Challenge {
            text,
            matcher,
            keystrokes: 0,
            mistakes: 0,
        };
        let display = challenge.display();
        self.state = SessionState::Typing(challenge);
        Some(display)
    }

    /// Begin a challenge on a random text of `level`.
    pub fn start_random<R: Rng + ?Sized>(
        &mut self,
        bank: &TextBank,
        level: Level,
        rng: &mut R,
    ) -> Option<TypingDisplay> {
        let text = bank.pick(level, rng)?.clone();
        self.start(text)
    }

    pub fn display(&self) -> Option<TypingDisplay> {
        match &self.state {
            SessionState::Typing(c) => Some(c.display()),
            SessionState::Idle => None,
        }
    }

    pub fn current_text(&self) -> Option<&TypingText> {
        match &self.state {
            SessionState::Typing(c) => Some(&c.text),
            SessionState::Idle => None,
        }
    }

    pub fn stats(&self) -> Option<ChallengeStats> {
        match &self.state {
            SessionState::Typing(c) => Some(c.stats()),
            SessionState::Idle => None,
        }
    }

    /// Mutable reference to the challenge. Panics if Idle.
    fn challenge(&mut self) -> &mut Challenge {
        match &mut self.state {
            SessionState::Typing(c) => c,
            SessionState::Idle => unreachable!("challenge() called in Idle state"),
        }
    }
}
