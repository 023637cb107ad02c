//! Power-on boot chain and the post-login loading bar.

use std::time::{Duration, Instant};

use super::timer::{ms, Deadline, Ticker};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BootPhase {
    #[default]
    Off,
    Bios1,
    Bios2,
    Bios3,
    Ready,
}

impl BootPhase {
    pub fn next(self) -> Option<BootPhase> {
        match self {
            BootPhase::Off => Some(BootPhase::Bios1),
            BootPhase::Bios1 => Some(BootPhase::Bios2),
            BootPhase::Bios2 => Some(BootPhase::Bios3),
            BootPhase::Bios3 => Some(BootPhase::Ready),
            BootPhase::Ready => None,
        }
    }

    /// How long this phase is held before the next one starts.
    pub fn hold(self) -> Option<Duration> {
        match self {
            BootPhase::Off => Some(ms(1000)),
            BootPhase::Bios1 => Some(ms(2000)),
            BootPhase::Bios2 => Some(ms(2000)),
            BootPhase::Bios3 => Some(ms(1500)),
            BootPhase::Ready => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            BootPhase::Off => 0,
            BootPhase::Bios1 => 1,
            BootPhase::Bios2 => 2,
            BootPhase::Bios3 => 3,
            BootPhase::Ready => 4,
        }
    }
}

// ── BIOS chain ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct BootSequencer {
    phase: BootPhase,
    advance: Deadline,
}

impl BootSequencer {
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == BootPhase::Ready
    }

    pub fn is_running(&self) -> bool {
        self.advance.is_armed()
    }

    pub fn power_on(&mut self, now: Instant) {
        self.phase = BootPhase::Off;
        if let Some(hold) = BootPhase::Off.hold() {
            self.advance.arm(now, hold);
        }
    }

    pub fn power_off(&mut self) {
        self.advance.cancel();
        self.phase = BootPhase::Off;
    }

    /// Advances one phase per elapsed deadline and returns the phases entered.
    pub fn tick(&mut self, now: Instant) -> Vec<BootPhase> {
        let mut entered = Vec::new();
        while let Some(due) = self.advance.fire(now) {
            let Some(next) = self.phase.next() else {
                break;
            };
            self.phase = next;
            entered.push(next);
            tracing::debug!(phase = ?next, "boot phase");
            if let Some(hold) = next.hold() {
                self.advance.arm(due, hold);
            }
        }
        entered
    }
}

// ── Loading bar ───────────────────────────────────────────────────────────────

pub const LOADING_STEP: u8 = 2;
pub const LOADING_TICK_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct LoadingBar {
    progress: u8,
    ticker: Ticker,
}

impl Default for LoadingBar {
    fn default() -> Self {
        Self {
            progress: 0,
            ticker: Ticker::new(ms(LOADING_TICK_MS)),
        }
    }
}

impl LoadingBar {
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_loading(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }

    pub fn start(&mut self, now: Instant) {
        self.progress = 0;
        self.ticker.start(now);
    }

    /// Returns true on the tick that reaches 100.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.ticker.is_running() {
            return false;
        }
        let steps = self.ticker.elapsed_ticks(now);
        let gained = u32::from(LOADING_STEP).saturating_mul(steps);
        self.progress = (u32::from(self.progress) + gained).min(100) as u8;
        if self.progress >= 100 {
            self.ticker.stop();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_fixed_delays() {
        let t0 = Instant::now();
        let mut boot = BootSequencer::default();
        boot.power_on(t0);
        assert_eq!(boot.phase(), BootPhase::Off);
        boot.tick(t0 + ms(999));
        assert_eq!(boot.phase(), BootPhase::Off);
        boot.tick(t0 + ms(1000));
        assert_eq!(boot.phase(), BootPhase::Bios1);
        boot.tick(t0 + ms(3000));
        assert_eq!(boot.phase(), BootPhase::Bios2);
        boot.tick(t0 + ms(5000));
        assert_eq!(boot.phase(), BootPhase::Bios3);
        boot.tick(t0 + ms(6499));
        assert_eq!(boot.phase(), BootPhase::Bios3);
        boot.tick(t0 + ms(6500));
        assert!(boot.is_ready());
        assert!(!boot.is_running());
    }

    #[test]
    fn late_tick_replays_every_phase_in_order() {
        let t0 = Instant::now();
        let mut boot = BootSequencer::default();
        boot.power_on(t0);
        let entered = boot.tick(t0 + ms(60_000));
        assert_eq!(
            entered,
            vec![BootPhase::Bios1, BootPhase::Bios2, BootPhase::Bios3, BootPhase::Ready]
        );
    }

    #[test]
    fn power_off_cancels_pending_phase() {
        let t0 = Instant::now();
        let mut boot = BootSequencer::default();
        boot.power_on(t0);
        boot.tick(t0 + ms(1500));
        boot.power_off();
        assert!(boot.tick(t0 + ms(60_000)).is_empty());
        assert_eq!(boot.phase(), BootPhase::Off);
    }

    #[test]
    fn loading_reaches_exactly_one_hundred_after_fifty_ticks() {
        let t0 = Instant::now();
        let mut bar = LoadingBar::default();
        bar.start(t0);
        let mut last = 0;
        for i in 1..=49u64 {
            assert!(!bar.tick(t0 + ms(LOADING_TICK_MS * i)));
            assert!(bar.progress() >= last);
            last = bar.progress();
        }
        assert_eq!(bar.progress(), 98);
        assert!(bar.tick(t0 + ms(LOADING_TICK_MS * 50)));
        assert_eq!(bar.progress(), 100);
        assert!(!bar.tick(t0 + ms(LOADING_TICK_MS * 80)));
        assert_eq!(bar.progress(), 100);
    }

    #[test]
    fn idle_loading_bar_stays_at_zero() {
        let t0 = Instant::now();
        let mut bar = LoadingBar::default();
        assert!(!bar.tick(t0 + ms(10_000)));
        assert_eq!(bar.progress(), 0);
    }
}
