use tracing::{debug, debug_span};

use drill_core::matcher::TypeResult;

use super::types::{ChallengeOutcome, KeyEvent, KeyResponse, SessionState};
use super::TypingSession;

/// Fold a raw keystroke into the matcher's alphabet. `None` for keys the
/// session ignores entirely.
fn normalize_key(c: char) -> Option<char> {
    c.is_ascii_graphic().then(|| c.to_ascii_lowercase())
}

impl TypingSession {
    /// Process a key event. Returns a KeyResponse describing what the caller should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        if !self.is_typing() {
            return KeyResponse::not_consumed();
        }

        match event {
            KeyEvent::Cancel => self.end_challenge(ChallengeOutcome::Cancelled),
            KeyEvent::Char(raw) => match normalize_key(raw) {
                Some(c) => self.handle_typed(c),
                None => KeyResponse::not_consumed(),
            },
        }
    }

    fn handle_typed(&mut self, c: char) -> KeyResponse {
        let max_mistakes = self.max_mistakes;
        let challenge = self.challenge();
        challenge.keystrokes += 1;
        let result = challenge.matcher.type_char(c);

        match result {
            TypeResult::Correct => self.make_display_response(result),
            TypeResult::Finished => {
                let outcome = ChallengeOutcome::Completed(self.challenge().stats());
                let mut resp = self.make_display_response(result);
                resp.outcome = Some(outcome);
                self.state = SessionState::Idle;
                debug!(?outcome, "challenge completed");
                resp
            }
            TypeResult::Incorrect => {
                let challenge = self.challenge();
                challenge.mistakes += 1;
                let mistakes = challenge.mistakes;
                if max_mistakes.is_some_and(|limit| mistakes >= limit) {
                    let outcome = ChallengeOutcome::Failed(challenge.stats());
                    let mut resp = self.end_challenge(outcome);
                    resp.result = Some(result);
                    resp
                } else {
                    self.make_display_response(result)
                }
            }
        }
    }

    fn end_challenge(&mut self, outcome: ChallengeOutcome) -> KeyResponse {
        debug!(?outcome, "challenge ended");
        self.state = SessionState::Idle;
        let mut resp = KeyResponse::consumed();
        resp.outcome = Some(outcome);
        resp
    }
}
