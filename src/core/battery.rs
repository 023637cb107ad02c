use std::time::Instant;

use super::cue::{Cue, CueQueue};
use super::timer::{ms, Ticker};

pub const BATTERY_TICK_MS: u64 = 1000;
const DRAIN_PER_TICK: u8 = 1;
const CHARGE_PER_TICK: u8 = 2;

/// Laptop battery. Survives power cycles; only runs while the session is up.
#[derive(Debug, Clone)]
pub struct Battery {
    level: u8,
    charging: bool,
    ticker: Ticker,
}

impl Default for Battery {
    fn default() -> Self {
        Self {
            level: 100,
            charging: false,
            ticker: Ticker::new(ms(BATTERY_TICK_MS)),
        }
    }
}

impl Battery {
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    pub fn is_depleted(&self) -> bool {
        self.level == 0
    }

    pub fn toggle_charger(&mut self, cues: &mut CueQueue) {
        self.charging = !self.charging;
        cues.push(Cue::Click);
    }

    pub fn resume(&mut self, now: Instant) {
        if !self.ticker.is_running() {
            self.ticker.start(now);
        }
    }

    pub fn suspend(&mut self) {
        self.ticker.stop();
    }

    pub fn tick(&mut self, now: Instant) {
        for _ in 0..self.ticker.elapsed_ticks(now) {
            self.level = if self.charging {
                self.level.saturating_add(CHARGE_PER_TICK).min(100)
            } else {
                self.level.saturating_sub(DRAIN_PER_TICK)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_one_percent_per_second() {
        let t0 = Instant::now();
        let mut b = Battery::default();
        b.resume(t0);
        b.tick(t0 + ms(3500));
        assert_eq!(b.level(), 97);
    }

    #[test]
    fn charging_adds_two_and_caps_at_full() {
        let t0 = Instant::now();
        let mut cues = CueQueue::default();
        let mut b = Battery::default();
        b.resume(t0);
        b.tick(t0 + ms(10_000));
        assert_eq!(b.level(), 90);
        b.toggle_charger(&mut cues);
        b.tick(t0 + ms(13_000));
        assert_eq!(b.level(), 96);
        b.tick(t0 + ms(20_000));
        assert_eq!(b.level(), 100);
        assert_eq!(cues.drain(), vec![Cue::Click]);
    }

    #[test]
    fn never_drops_below_zero() {
        let t0 = Instant::now();
        let mut b = Battery::default();
        b.resume(t0);
        b.tick(t0 + ms(500_000));
        assert!(b.is_depleted());
    }

    #[test]
    fn suspended_battery_holds_its_level() {
        let t0 = Instant::now();
        let mut b = Battery::default();
        b.resume(t0);
        b.suspend();
        b.tick(t0 + ms(50_000));
        assert_eq!(b.level(), 100);
    }
}
