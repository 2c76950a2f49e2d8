
use drill_core::matcher::OperatingSystem;
use drill_core::textbank::TypingText;

use super::KeyResponse;
use super::{KeyEvent, TypingSession};

pub(super) fn text(title: &str, kana: &str) -> TypingText {
    TypingText::new(title, kana)
}

/// Session already typing `kana`.
pub(super) fn started(kana: &str, os: OperatingSystem) -> TypingSession {
    let mut session = TypingSession::new(os);
    session
        .start(text("テスト", kana))
        .expect("text should be typeable");
    session
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(session: &mut TypingSession, s: &str) -> Vec<KeyResponse> {
    KeyEvent::text(s).map(|ev| session.handle_key(ev)).collect()
}
