//! The virtual laptop: power, boot chain, lock screen, loading bar and the
//! session shell, all owned by one value and advanced by `tick`.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::auth::{AuthGate, AuthOutcome, Key};
use super::battery::Battery;
use super::boot::{BootPhase, BootSequencer, LoadingBar};
use super::cue::{Cue, CueQueue};
use super::desktop::Desktop;
use super::terminal::PortfolioTerminal;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpenMode {
    #[default]
    Desktop,
    Terminal,
}

/// What the display is showing. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Off,
    Boot(BootPhase),
    Locked,
    Loading(u8),
    Session,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub desktop: Desktop,
    pub terminal: PortfolioTerminal,
}

impl Session {
    fn start(now: Instant) -> Self {
        Self {
            desktop: Desktop::default(),
            terminal: PortfolioTerminal::start(now),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Machine {
    powered: bool,
    power_cycles: u64,
    boot: BootSequencer,
    gate: AuthGate,
    loading: LoadingBar,
    battery: Battery,
    mode: OpenMode,
    session: Option<Session>,
    cues: CueQueue,
}

impl Machine {
    pub fn new(mode: OpenMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    // ── Read-only view ────────────────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        if !self.powered {
            Screen::Off
        } else if !self.boot.is_ready() {
            Screen::Boot(self.boot.phase())
        } else if !self.gate.is_authenticated() {
            Screen::Locked
        } else if self.session.is_none() {
            Screen::Loading(self.loading.progress())
        } else {
            Screen::Session
        }
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn power_cycles(&self) -> u64 {
        self.power_cycles
    }

    pub fn boot_phase(&self) -> BootPhase {
        self.boot.phase()
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    pub fn loading_progress(&self) -> u8 {
        self.loading.progress()
    }

    pub fn battery(&self) -> &Battery {
        &self.battery
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn pending_cues(&self) -> &[Cue] {
        self.cues.pending()
    }

    pub fn drain_cues(&mut self) -> Vec<Cue> {
        self.cues.drain()
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn toggle_power(&mut self, now: Instant) {
        if self.powered {
            self.power_off();
            self.cues.push(Cue::Click);
        } else {
            self.powered = true;
            self.power_cycles += 1;
            self.boot.power_on(now);
            self.cues.push(Cue::Startup);
            tracing::info!(cycle = self.power_cycles, "power on");
        }
    }

    /// Drops every piece of per-cycle state, and with it every pending timer.
    fn power_off(&mut self) {
        self.powered = false;
        self.boot.power_off();
        self.gate.reset();
        self.loading.reset();
        self.session = None;
        self.battery.suspend();
        tracing::info!(cycle = self.power_cycles, "power off");
    }

    /// Keyboard input for the lock screen. Ignored everywhere else.
    pub fn key(&mut self, key: Key, now: Instant) -> Option<AuthOutcome> {
        if self.screen() != Screen::Locked {
            return None;
        }
        let outcome = self.gate.key(key, now, &mut self.cues);
        if outcome == AuthOutcome::Granted {
            self.loading.start(now);
        }
        Some(outcome)
    }

    pub fn toggle_charger(&mut self) {
        self.battery.toggle_charger(&mut self.cues);
    }

    /// Switch between the desktop and the portfolio terminal. The terminal
    /// starts over from its welcome screen each time it is entered.
    pub fn toggle_mode(&mut self, now: Instant) {
        self.mode = match self.mode {
            OpenMode::Desktop => OpenMode::Terminal,
            OpenMode::Terminal => OpenMode::Desktop,
        };
        if let (OpenMode::Terminal, Some(session)) = (self.mode, self.session.as_mut()) {
            session.terminal = PortfolioTerminal::start(now);
        }
        self.cues.push(Cue::Click);
    }

    pub fn with_desktop<R>(&mut self, f: impl FnOnce(&mut Desktop, &mut CueQueue) -> R) -> Option<R> {
        let session = self.session.as_mut()?;
        Some(f(&mut session.desktop, &mut self.cues))
    }

    pub fn with_terminal<R>(
        &mut self,
        f: impl FnOnce(&mut PortfolioTerminal, &mut CueQueue) -> R,
    ) -> Option<R> {
        let session = self.session.as_mut()?;
        Some(f(&mut session.terminal, &mut self.cues))
    }

    // ── Time ──────────────────────────────────────────────────────────────────

    pub fn tick(&mut self, now: Instant) {
        if !self.powered {
            return;
        }
        self.boot.tick(now);
        self.gate.tick(now);

        if self.loading.tick(now) {
            tracing::info!("loading complete, session ready");
            self.session = Some(Session::start(now));
            self.battery.resume(now);
        }

        if let Some(session) = self.session.as_mut() {
            self.battery.tick(now);
            session.desktop.tick(now);
            session.terminal.tick(now, &mut self.cues);
        }
    }
}
