//! Deadlines and fixed-period tickers measured against a caller-supplied clock.
//!
//! Nothing in here reads the wall clock. Every owner passes `now` in, which is
//! what keeps the state machines deterministic under test.

use std::time::{Duration, Instant};

// ── One-shot deadline ─────────────────────────────────────────────────────────

/// A single pending transition. Re-arming replaces the previous deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    due: Option<Instant>,
}

impl Deadline {
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Disarms and returns the instant it was due at, if that is not after `now`.
    ///
    /// Owners that chain deadlines re-arm from the returned instant rather than
    /// from `now`, so a late tick replays every step instead of skipping one.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.due {
            Some(at) if at <= now => {
                self.due = None;
                Some(at)
            }
            _ => None,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|at| at.saturating_duration_since(now))
    }
}

// ── Fixed-period ticker ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub const fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of whole periods elapsed since the last call. Catches up after
    /// a coarse tick instead of dropping periods.
    pub fn elapsed_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next else {
            return 0;
        };
        let mut ticks = 0u32;
        while next <= now {
            ticks = ticks.saturating_add(1);
            next += self.period;
        }
        self.next = Some(next);
        ticks
    }
}

pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_fires_once_at_due_time() {
        let t0 = Instant::now();
        let mut d = Deadline::default();
        d.arm(t0, ms(1000));
        assert_eq!(d.fire(t0 + ms(999)), None);
        assert_eq!(d.fire(t0 + ms(1000)), Some(t0 + ms(1000)));
        assert_eq!(d.fire(t0 + ms(5000)), None);
        assert!(!d.is_armed());
    }

    #[test]
    fn cancelled_deadline_never_fires() {
        let t0 = Instant::now();
        let mut d = Deadline::default();
        d.arm(t0, ms(10));
        d.cancel();
        assert_eq!(d.fire(t0 + ms(100)), None);
    }

    #[test]
    fn rearming_replaces_previous_deadline() {
        let t0 = Instant::now();
        let mut d = Deadline::default();
        d.arm(t0, ms(10));
        d.arm(t0, ms(300));
        assert_eq!(d.fire(t0 + ms(10)), None);
        assert_eq!(d.remaining(t0 + ms(100)), Some(ms(200)));
    }

    #[test]
    fn ticker_catches_up_on_late_tick() {
        let t0 = Instant::now();
        let mut t = Ticker::new(ms(50));
        assert_eq!(t.elapsed_ticks(t0 + ms(500)), 0);
        t.start(t0);
        assert_eq!(t.elapsed_ticks(t0 + ms(49)), 0);
        assert_eq!(t.elapsed_ticks(t0 + ms(160)), 3);
        assert_eq!(t.elapsed_ticks(t0 + ms(200)), 1);
        t.stop();
        assert_eq!(t.elapsed_ticks(t0 + ms(1000)), 0);
    }
}
