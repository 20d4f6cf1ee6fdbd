use std::io::{self, Write};

use tracing::debug;

/// Optional collaborator notified of session milestones. Notifications are
/// fire-and-forget and must not block the event loop.
pub trait SessionObserver {
    fn on_level_up(&mut self, _level: u32, _coach: &str) {}
    fn on_end(&mut self) {}
}

/// Rings the terminal bell on level-up.
pub struct TerminalBell;

impl SessionObserver for TerminalBell {
    fn on_level_up(&mut self, level: u32, _coach: &str) {
        let mut out = io::stdout();
        if out.write_all(b"\x07").and_then(|_| out.flush()).is_err() {
            debug!(level, "terminal bell unavailable");
        }
    }
}
