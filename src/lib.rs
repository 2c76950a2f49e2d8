//! Typing drill engine: kana romanization, keystroke matching with alternate
//! spellings, and a per-player typing session.

pub mod trace_init;

pub use drill_core::{matcher, romaji, settings, textbank, unicode};
pub use drill_session as session;

pub use drill_core::matcher::{OperatingSystem, TypeResult, TypingMatcher};
pub use drill_session::{
    ChallengeOutcome, ChallengeStats, KeyEvent, KeyResponse, TypingDisplay, TypingSession,
};
pub use trace_init::init_tracing;
