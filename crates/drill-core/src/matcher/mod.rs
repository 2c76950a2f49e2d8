//! Online keystroke matcher.
//!
//! Holds the expected romaji for one text and judges each keystroke against
//! it. A keystroke that differs from the expected character can still be
//! accepted when an alternate spelling allows it; the buffer is then rewritten
//! in place so the rest of the text follows the chosen spelling.

mod buffer;
mod os;
mod rules;


pub use buffer::ExpectedBuffer;
pub use os::OperatingSystem;
pub use rules::{first_match, AlternateRule, OsGate, RuleContext, ALTERNATE_RULES};

use tracing::{debug, debug_span, warn};

use crate::romaji::romanize_chars;

/// Outcome of one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeResult {
    Correct,
    Incorrect,
    Finished,
}

#[derive(Debug, Clone)]
pub struct TypingMatcher {
    buffer: ExpectedBuffer,
    os: OperatingSystem,
}

impl TypingMatcher {
    /// An empty matcher. Call [`load`](Self::load) before typing.
    pub fn new(os: OperatingSystem) -> Self {
        Self {
            buffer: ExpectedBuffer::default(),
            os,
        }
    }

    /// Matcher primed with the canonical romaji of `kana`.
    pub fn from_kana(kana: &str, os: OperatingSystem) -> Self {
        let mut matcher = Self::new(os);
        matcher.load(kana);
        matcher
    }

    /// Romanize `kana` and reset the cursor.
    pub fn load(&mut self, kana: &str) {
        let chars: Vec<char> = kana.chars().collect();
        self.load_romaji(romanize_chars(&chars));
    }

    /// Install an already-romanized buffer and reset the cursor.
    pub fn load_romaji(&mut self, romaji: Vec<char>) {
        debug!(len = romaji.len(), "loaded expected romaji");
        self.buffer.reset(romaji);
    }

    /// Judge one keystroke.
    ///
    /// A mismatch leaves the buffer and cursor untouched. On acceptance the
    /// cursor advances by exactly one; `Finished` is reported on the keystroke
    /// that reaches the end.
    pub fn type_char(&mut self, input: char) -> TypeResult {
        let _span = debug_span!("type_char", %input, cursor = self.buffer.cursor()).entered();

        let Some(expected) = self.buffer.current() else {
            warn!("keystroke after the text was finished");
            return TypeResult::Incorrect;
        };

        if input != expected {
            let Some(ctx) = RuleContext::from_buffer(&self.buffer, input, self.os) else {
                return TypeResult::Incorrect;
            };
            let Some(rule) = first_match(&ctx) else {
                debug!(%expected, "mismatch");
                return TypeResult::Incorrect;
            };
            rule.apply(&ctx, &mut self.buffer);
            debug!(rule = rule.name, "alternate spelling accepted");
        }

        self.buffer.advance();
        if self.buffer.is_complete() {
            TypeResult::Finished
        } else {
            TypeResult::Correct
        }
    }

    /// Type every character of `keys`, stopping at the first mismatch.
    /// Returns the last result, or `None` for empty input.
    pub fn type_str(&mut self, keys: &str) -> Option<TypeResult> {
        let mut last = None;
        for c in keys.chars() {
            let result = self.type_char(c);
            last = Some(result);
            if result == TypeResult::Incorrect {
                break;
            }
        }
        last
    }

    pub fn buffer(&self) -> &ExpectedBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn is_finished(&self) -> bool {
        !self.buffer.is_empty() && self.buffer.is_complete()
    }

    pub fn os(&self) -> OperatingSystem {
        self.os
    }
}
