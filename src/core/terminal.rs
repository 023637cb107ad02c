//! The portfolio terminal shell: typewriter welcome and section navigation.

use std::time::Instant;

use super::cue::{Cue, CueQueue};
use super::timer::{ms, Deadline, Ticker};

pub const WELCOME_TEXT: &str = "Welcome to A-013\nInitializing system...";
pub const TYPE_SPEED_MS: u64 = 50;
pub const WELCOME_HOLD_MS: u64 = 3000;
pub const TRANSITION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Welcome,
    Portfolio,
    Contact,
    Skills,
    Education,
    Experience,
    Projects,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Welcome => "Welcome",
            Section::Portfolio => "Portfolio Navigation",
            Section::Contact => "Contact Information",
            Section::Skills => "Technical Skills",
            Section::Education => "Education",
            Section::Experience => "Work Experience",
            Section::Projects => "Projects",
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Section::Welcome => "Welcome",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
        }
    }
}

/// Entries of the portfolio menu, top to bottom.
pub const MENU: [Section; 5] = [
    Section::Contact,
    Section::Skills,
    Section::Education,
    Section::Experience,
    Section::Projects,
];

/// Order used by prev/next, wrapping at both ends.
const CYCLE: [Section; 6] = [
    Section::Portfolio,
    Section::Contact,
    Section::Skills,
    Section::Education,
    Section::Experience,
    Section::Projects,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone)]
pub struct PortfolioTerminal {
    section: Section,
    typed: usize,
    typer: Ticker,
    welcome_hold: Deadline,
    transition: Deadline,
    pending: Option<Section>,
    content_visible: bool,
    menu_cursor: usize,
}

impl Default for PortfolioTerminal {
    fn default() -> Self {
        Self {
            section: Section::Welcome,
            typed: 0,
            typer: Ticker::new(ms(TYPE_SPEED_MS)),
            welcome_hold: Deadline::default(),
            transition: Deadline::default(),
            pending: None,
            content_visible: true,
            menu_cursor: 0,
        }
    }
}

impl PortfolioTerminal {
    pub fn start(now: Instant) -> Self {
        let mut term = Self::default();
        term.typer.start(now);
        term.welcome_hold.arm(now, ms(WELCOME_HOLD_MS));
        term
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn typed_text(&self) -> &str {
        match WELCOME_TEXT.char_indices().nth(self.typed) {
            Some((end, _)) => &WELCOME_TEXT[..end],
            None => WELCOME_TEXT,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.typer.is_running()
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.checked_sub(1).unwrap_or(MENU.len() - 1);
    }

    pub fn menu_down(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % MENU.len();
    }

    pub fn menu_activate(&mut self, cues: &mut CueQueue) {
        if self.section == Section::Portfolio {
            self.open_section(MENU[self.menu_cursor], cues);
        }
    }

    /// Jump straight to a section from the menu.
    pub fn open_section(&mut self, section: Section, cues: &mut CueQueue) {
        if self.section == Section::Welcome || section == Section::Welcome {
            return;
        }
        self.transition.cancel();
        self.pending = None;
        self.section = section;
        self.content_visible = true;
        cues.push(Cue::Click);
    }

    pub fn back_to_menu(&mut self, cues: &mut CueQueue) {
        self.open_section(Section::Portfolio, cues);
    }

    /// Prev/next with a short fade. A newer request supersedes a pending one.
    pub fn navigate(&mut self, direction: Direction, now: Instant) {
        let from = self.pending.unwrap_or(self.section);
        if matches!(from, Section::Welcome | Section::Portfolio) && self.pending.is_none() {
            return;
        }
        let idx = CYCLE.iter().position(|&s| s == from).unwrap_or(0);
        let target = match direction {
            Direction::Prev => CYCLE[(idx + CYCLE.len() - 1) % CYCLE.len()],
            Direction::Next => CYCLE[(idx + 1) % CYCLE.len()],
        };
        self.content_visible = false;
        self.pending = Some(target);
        self.transition.arm(now, ms(TRANSITION_MS));
    }

    pub fn tick(&mut self, now: Instant, cues: &mut CueQueue) {
        let total = WELCOME_TEXT.chars().count();
        let steps = self.typer.elapsed_ticks(now) as usize;
        if steps > 0 {
            self.typed = (self.typed + steps).min(total);
            if self.typed >= total {
                self.typer.stop();
            }
        }

        if self.welcome_hold.fire(now).is_some() && self.section == Section::Welcome {
            self.typer.stop();
            self.typed = total;
            self.section = Section::Portfolio;
            cues.push(Cue::Startup);
        }

        if self.transition.fire(now).is_some() {
            if let Some(target) = self.pending.take() {
                self.section = target;
                self.content_visible = true;
                cues.push(Cue::Click);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_menu(t0: Instant, cues: &mut CueQueue) -> PortfolioTerminal {
        let mut term = PortfolioTerminal::start(t0);
        term.tick(t0 + ms(WELCOME_HOLD_MS), cues);
        cues.drain();
        term
    }

    #[test]
    fn welcome_types_then_hands_over_to_menu() {
        let t0 = Instant::now();
        let mut cues = CueQueue::default();
        let mut term = PortfolioTerminal::start(t0);
        assert_eq!(term.typed_text(), "");
        term.tick(t0 + ms(TYPE_SPEED_MS * 7), &mut cues);
        assert_eq!(term.typed_text(), "Welcome");
        term.tick(t0 + ms(2999), &mut cues);
        assert_eq!(term.section(), Section::Welcome);
        assert_eq!(term.typed_text(), WELCOME_TEXT);
        assert!(!term.is_typing());
        term.tick(t0 + ms(3000), &mut cues);
        assert_eq!(term.section(), Section::Portfolio);
        assert_eq!(cues.drain(), vec![Cue::Startup]);
    }

    #[test]
    fn menu_selection_opens_section_immediately() {
        let t0 = Instant::now();
        let mut cues = CueQueue::default();
        let mut term = at_menu(t0, &mut cues);
        term.menu_down();
        term.menu_activate(&mut cues);
        assert_eq!(term.section(), Section::Skills);
        assert_eq!(cues.drain(), vec![Cue::Click]);
    }

    #[test]
    fn navigation_waits_for_transition_and_wraps() {
        let t0 = Instant::now();
        let mut cues = CueQueue::default();
        let mut term = at_menu(t0, &mut cues);
        term.open_section(Section::Projects, &mut cues);
        cues.drain();

        let t1 = t0 + ms(5000);
        term.navigate(Direction::Next, t1);
        assert!(!term.content_visible());
        assert_eq!(term.section(), Section::Projects);
        term.tick(t1 + ms(TRANSITION_MS), &mut cues);
        assert_eq!(term.section(), Section::Portfolio);
        assert!(term.content_visible());
        assert_eq!(cues.drain(), vec![Cue::Click]);
    }

    #[test]
    fn newer_navigation_supersedes_pending_one() {
        let t0 = Instant::now();
        let mut cues = CueQueue::default();
        let mut term = at_menu(t0, &mut cues);
        term.open_section(Section::Contact, &mut cues);
        cues.drain();

        let t1 = t0 + ms(5000);
        term.navigate(Direction::Next, t1);
        term.navigate(Direction::Next, t1 + ms(100));
        term.tick(t1 + ms(TRANSITION_MS), &mut cues);
        assert_eq!(term.section(), Section::Contact);
        term.tick(t1 + ms(100 + TRANSITION_MS), &mut cues);
        assert_eq!(term.section(), Section::Education);
        assert_eq!(cues.drain(), vec![Cue::Click]);
    }

    #[test]
    fn back_to_menu_cancels_pending_transition() {
        let t0 = Instant::now();
        let mut cues = CueQueue::default();
        let mut term = at_menu(t0, &mut cues);
        term.open_section(Section::Contact, &mut cues);
        term.navigate(Direction::Prev, t0 + ms(4000));
        term.back_to_menu(&mut cues);
        term.tick(t0 + ms(9000), &mut cues);
        assert_eq!(term.section(), Section::Portfolio);
        assert!(term.content_visible());
    }

    #[test]
    fn welcome_ignores_navigation() {
        let t0 = Instant::now();
        let mut cues = CueQueue::default();
        let mut term = PortfolioTerminal::start(t0);
        term.navigate(Direction::Next, t0);
        term.open_section(Section::Skills, &mut cues);
        assert_eq!(term.section(), Section::Welcome);
        assert!(cues.is_empty());
    }
}
