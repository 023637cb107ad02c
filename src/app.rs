//! Event loop: crossterm input in, machine ticks, cues out to the speaker,
//! one frame drawn per pass.

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};

use crate::core::contact::FormStatus;
use crate::core::desktop::{Desktop, WindowId};
use crate::core::terminal::Direction;
use crate::core::{Key, Machine, OpenMode, Screen};
use crate::desktop::{desktop_area, hit_test, to_local, DesktopHit, WindowHit};
use crate::sound::AudioDispatcher;
use crate::ui::Term;

const FRAME: Duration = Duration::from_millis(16);
const NUDGE_X: i32 = 2;
const NUDGE_Y: i32 = 1;

/// Everything the running program owns.
pub struct App {
    machine: Machine,
    audio: AudioDispatcher,
    quit: bool,
}

/// The chrome bar takes the first row; the laptop display gets the rest.
pub fn display_area(size: Rect) -> Rect {
    let top = size.height.min(1);
    Rect {
        y: size.y + top,
        height: size.height - top,
        ..size
    }
}

fn window_for_key(code: KeyCode) -> Option<WindowId> {
    match code {
        KeyCode::F(1) => Some(WindowId::Projects),
        KeyCode::F(2) => Some(WindowId::About),
        KeyCode::F(3) => Some(WindowId::Skills),
        KeyCode::F(4) => Some(WindowId::Contact),
        _ => None,
    }
}

impl App {
    pub fn new(machine: Machine, audio: AudioDispatcher) -> Self {
        Self {
            machine,
            audio,
            quit: false,
        }
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn audio(&self) -> &AudioDispatcher {
        &self.audio
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn tick(&mut self, now: Instant) {
        self.machine.tick(now);
        let cues = self.machine.drain_cues();
        self.audio.dispatch_all(cues);
    }

    // ── Keyboard ──────────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.quit = true;
                return;
            }
            KeyCode::F(10) => {
                self.machine.toggle_power(now);
                return;
            }
            KeyCode::F(9) => {
                self.machine.toggle_charger();
                return;
            }
            KeyCode::F(8) => {
                self.audio.toggle_mute();
                return;
            }
            KeyCode::F(6) => {
                if self.machine.is_powered() {
                    self.machine.toggle_mode(now);
                }
                return;
            }
            _ => {}
        }

        match self.machine.screen() {
            Screen::Locked => {
                let key = match code {
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Backspace => Key::Delete,
                    KeyCode::Char(c) if !ctrl => Key::Char(c),
                    _ => return,
                };
                if let Some(outcome) = self.machine.key(key, now) {
                    tracing::debug!(?outcome, "lock screen key");
                }
            }
            Screen::Session => match self.machine.mode() {
                OpenMode::Desktop => self.desktop_key(code, ctrl, now),
                OpenMode::Terminal => self.terminal_key(code, now),
            },
            _ => {}
        }
    }

    fn desktop_key(&mut self, code: KeyCode, ctrl: bool, now: Instant) {
        self.machine.with_desktop(|desk, cues| {
            if let Some(id) = window_for_key(code) {
                desk.activate_icon(id, cues);
                return;
            }
            let focused = desk.focused();
            match (code, focused) {
                (KeyCode::Tab, _) => desk.cycle_focus(),
                (KeyCode::Esc, Some(id)) => desk.close(id, cues),
                (KeyCode::Char('w'), Some(id)) if ctrl => desk.close(id, cues),
                (KeyCode::Char('n'), Some(id)) if ctrl => desk.toggle_minimize(id, cues),
                (_, Some(WindowId::Contact))
                    if !ctrl && !desk.window(WindowId::Contact).minimized =>
                {
                    contact_key(desk, code, now)
                }
                (KeyCode::Left, Some(id)) => desk.nudge(id, -NUDGE_X, 0),
                (KeyCode::Right, Some(id)) => desk.nudge(id, NUDGE_X, 0),
                (KeyCode::Up, Some(id)) => desk.nudge(id, 0, -NUDGE_Y),
                (KeyCode::Down, Some(id)) => desk.nudge(id, 0, NUDGE_Y),
                _ => {}
            }
        });
    }

    fn terminal_key(&mut self, code: KeyCode, now: Instant) {
        self.machine.with_terminal(|term, cues| match code {
            KeyCode::Up => term.menu_up(),
            KeyCode::Down => term.menu_down(),
            KeyCode::Enter => term.menu_activate(cues),
            KeyCode::Left => term.navigate(Direction::Prev, now),
            KeyCode::Right => term.navigate(Direction::Next, now),
            KeyCode::Esc | KeyCode::Backspace => term.back_to_menu(cues),
            _ => {}
        });
    }

    // ── Mouse ─────────────────────────────────────────────────────────────────

    pub fn handle_mouse(&mut self, mouse: MouseEvent, size: Rect) {
        if self.machine.screen() != Screen::Session || self.machine.mode() != OpenMode::Desktop {
            return;
        }
        let display = display_area(size);
        let pointer = to_local(desktop_area(display), mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(hit) = self
                    .machine
                    .session()
                    .map(|s| hit_test(&s.desktop, display, mouse.column, mouse.row))
                else {
                    return;
                };
                if hit == DesktopHit::SoundToggle {
                    self.audio.toggle_mute();
                    return;
                }
                self.machine.with_desktop(|desk, cues| match hit {
                    DesktopHit::Icon(id) => desk.activate_icon(id, cues),
                    DesktopHit::Window(id, WindowHit::Close) => desk.close(id, cues),
                    DesktopHit::Window(id, WindowHit::Minimize) => desk.toggle_minimize(id, cues),
                    DesktopHit::Window(id, WindowHit::Maximize) => {
                        desk.focus(id);
                        desk.maximize(id, cues);
                    }
                    DesktopHit::Window(id, WindowHit::Title) => desk.begin_drag(id, pointer),
                    DesktopHit::Window(id, WindowHit::Content) => desk.focus(id),
                    DesktopHit::SoundToggle | DesktopHit::Background => {}
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.machine.with_desktop(|desk, _| desk.drag_to(pointer));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.machine.with_desktop(|desk, _| desk.end_drag());
            }
            _ => {}
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    pub fn draw(&self, f: &mut Frame) {
        let size = f.area();
        let chrome = Rect { height: size.height.min(1), ..size };
        let display = display_area(size);
        crate::status::render_status_bar(f, chrome, &self.machine, self.audio.is_muted());

        match self.machine.screen() {
            Screen::Off => crate::boot::draw_powered_off(f, display),
            Screen::Boot(phase) => crate::boot::draw_boot(f, display, phase),
            Screen::Locked => crate::auth::draw_lock_screen(f, display, self.machine.gate()),
            Screen::Loading(progress) => crate::auth::draw_loading(f, display, progress),
            Screen::Session => {
                let Some(session) = self.machine.session() else {
                    return;
                };
                match self.machine.mode() {
                    OpenMode::Desktop => crate::desktop::draw_desktop(
                        f,
                        display,
                        &session.desktop,
                        self.audio.is_muted(),
                    ),
                    OpenMode::Terminal => crate::terminal::draw_terminal(
                        f,
                        display,
                        &session.terminal,
                        self.machine.battery(),
                    ),
                }
            }
        }
    }
}

/// Typing into the focused contact window.
fn contact_key(desk: &mut Desktop, code: KeyCode, now: Instant) {
    let form = desk.contact_mut();
    match code {
        KeyCode::Up => form.prev_field(),
        KeyCode::Down => form.next_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Enter if form.status() == FormStatus::Sent => form.reset(),
        KeyCode::Enter => form.submit(now),
        KeyCode::Char(c) => form.input(c),
        _ => {}
    }
}

pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| app.draw(f))?;
        if app.should_quit() {
            tracing::info!("quit requested");
            return Ok(());
        }

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                        continue;
                    }
                    app.handle_key(key.code, key.modifiers, Instant::now());
                }
                Event::Mouse(mouse) => {
                    let ts = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, ts.width, ts.height));
                }
                _ => {}
            }
        }
    }
}
