use drill_core::matcher::{TypeResult, TypingMatcher};
use drill_core::textbank::TypingText;

/// A keystroke delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    /// Abandon the current challenge.
    Cancel,
}

impl KeyEvent {
    /// One event per character of `s`.
    pub fn text(s: &str) -> impl Iterator<Item = KeyEvent> + '_ {
        s.chars().map(KeyEvent::Char)
    }
}

/// What the host should show for the current challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingDisplay {
    pub title: String,
    /// Romaji accepted so far.
    pub typed: String,
    /// Romaji still expected under the spelling chosen so far.
    pub remaining: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChallengeStats {
    /// Consumed keystrokes, correct or not.
    pub keystrokes: u32,
    pub mistakes: u32,
    /// Length of the expected romaji at the end, after any alternate spellings.
    pub romaji_len: usize,
}

impl ChallengeStats {
    /// Share of keystrokes that were accepted, 1.0 when nothing was typed.
    pub fn accuracy(&self) -> f64 {
        if self.keystrokes == 0 {
            return 1.0;
        }
        let correct = self.keystrokes.saturating_sub(self.mistakes);
        f64::from(correct) / f64::from(self.keystrokes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChallengeOutcome {
    Completed(ChallengeStats),
    Cancelled,
    /// The mistake limit was reached.
    Failed(ChallengeStats),
}

impl ChallengeOutcome {
    pub fn stats(&self) -> Option<&ChallengeStats> {
        match self {
            ChallengeOutcome::Completed(s) | ChallengeOutcome::Failed(s) => Some(s),
            ChallengeOutcome::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub result: Option<TypeResult>,
    pub display: Option<TypingDisplay>,
    /// Set on the keystroke that ends the challenge.
    pub outcome: Option<ChallengeOutcome>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            result: None,
            display: None,
            outcome: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}

pub(crate) enum SessionState {
    Idle,
    Typing(Challenge),
}

pub(crate) struct Challenge {
    pub(crate) text: TypingText,
    pub(crate) matcher: TypingMatcher,
    pub(crate) keystrokes: u32,
    pub(crate) mistakes: u32,
}

impl Challenge {
    pub(crate) fn display(&self) -> TypingDisplay {
        let buffer = self.matcher.buffer();
        TypingDisplay {
            title: self.text.title.clone(),
            typed: buffer.typed_string(),
            remaining: buffer.remaining_string(),
        }
    }

    pub(crate) fn stats(&self) -> ChallengeStats {
        ChallengeStats {
            keystrokes: self.keystrokes,
            mistakes: self.mistakes,
            romaji_len: self.matcher.buffer().len(),
        }
    }
}
