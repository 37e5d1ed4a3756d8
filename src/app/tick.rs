use std::time::Instant;

use super::App;
use crate::components::status_bar::StatusMessage;

// Implementation block for tick-related logic in the App.
impl App {
    /// Called on every tick of the event loop. Expired status messages fall
    /// back to the key hint.
    pub fn on_tick(&mut self) {
        self.expire_status(Instant::now());
    }

    pub(crate) fn expire_status(&mut self, now: Instant) {
        let Some(set_at) = self.status_set_at else {
            return;
        };
        if now.saturating_duration_since(set_at) >= self.status_timeout {
            self.status = StatusMessage::Hint;
            self.status_set_at = None;
            self.request_redraw();
        }
    }
}
