use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Splash,
    LevelUp,
    Exit,
}

/// One-shot deadlines polled from the event loop's tick.
#[derive(Clone, Debug, Default)]
pub struct Timers {
    pending: Vec<(TimerKind, Instant)>,
}

impl Timers {
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, after: Duration) {
        self.pending.retain(|(k, _)| *k != kind);
        self.pending.push((kind, now + after));
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|(k, _)| *k == kind)
    }

    /// Remove and return every timer whose deadline has passed, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<(TimerKind, Instant)> = Vec::new();
        self.pending.retain(|&(kind, at)| {
            if at <= now {
                due.push((kind, at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, at)| at);
        due.into_iter().map(|(kind, _)| kind).collect()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl Stopwatch {
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self, now: Instant) {
        if self.started_at.is_some() && self.stopped_at.is_none() {
            self.stopped_at = Some(now);
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.started_at, self.stopped_at) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => now.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }
}
