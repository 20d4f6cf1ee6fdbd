use std::cell::RefCell;
use std::process::Command;

use tracing::debug;

/// Wraps a message for a coach. Implementations carry no session state.
pub trait Mascot {
    fn decorate(&self, coach: &str, message: &str) -> String;
}

/// Plain speech bubble with a small critter underneath.
pub struct Bubble;

impl Mascot for Bubble {
    fn decorate(&self, coach: &str, message: &str) -> String {
        let width = message.chars().count();
        let mut out = String::new();
        out.push_str(&format!(" {}\n", "_".repeat(width + 2)));
        out.push_str(&format!("< {message} >\n"));
        out.push_str(&format!(" {}\n", "-".repeat(width + 2)));
        out.push_str("        \\   ^__^\n");
        out.push_str("         \\  (oo)\\_______\n");
        out.push_str("            (__)\\       )\\/\\\n");
        out.push_str("                ||----w |\n");
        out.push_str(&format!("                ||     ||   {coach}\n"));
        out
    }
}

/// Shells out to `cowsay -f <coach>`, falling back to [`Bubble`] when the
/// program is missing or rejects the cowfile.
pub struct Cowsay;

impl Mascot for Cowsay {
    fn decorate(&self, coach: &str, message: &str) -> String {
        match Command::new("cowsay").args(["-f", coach, message]).output() {
            Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).into_owned(),
            Ok(out) => {
                debug!(coach, status = %out.status, "cowsay failed");
                Bubble.decorate(coach, message)
            }
            Err(err) => {
                debug!(%err, "cowsay unavailable");
                Bubble.decorate(coach, message)
            }
        }
    }
}

/// Remembers the last decoration so redraws on every tick stay cheap.
pub struct CachedMascot<M> {
    inner: M,
    last: RefCell<Option<(String, String, String)>>,
}

impl<M: Mascot> CachedMascot<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            last: RefCell::new(None),
        }
    }
}

impl<M: Mascot> Mascot for CachedMascot<M> {
    fn decorate(&self, coach: &str, message: &str) -> String {
        if let Some((c, m, out)) = self.last.borrow().as_ref() {
            if c == coach && m == message {
                return out.clone();
            }
        }
        let out = self.inner.decorate(coach, message);
        *self.last.borrow_mut() = Some((coach.to_string(), message.to_string(), out.clone()));
        out
    }
}
