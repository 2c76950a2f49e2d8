use drill_core::matcher::TypeResult;

use super::types::KeyResponse;
use super::TypingSession;

impl TypingSession {
    pub(super) fn make_display_response(&mut self, result: TypeResult) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        resp.result = Some(result);
        resp.display = Some(self.challenge().display());
        resp
    }
}
