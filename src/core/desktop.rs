//! Desktop window manager: open/close/focus, stacking, drag and minimize.
//!
//! Every window exists for the whole session. Closing only clears `is_open`,
//! so position, size and z-order survive until the next open.

use rand::Rng;
use std::time::Instant;

use super::contact::ContactForm;
use super::cue::{Cue, CueQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowId {
    Projects,
    About,
    Skills,
    Contact,
}

impl WindowId {
    pub const ALL: [WindowId; 4] = [
        WindowId::Projects,
        WindowId::About,
        WindowId::Skills,
        WindowId::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WindowId::Projects => "Projects",
            WindowId::About => "About Me",
            WindowId::Skills => "Skills",
            WindowId::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        match self {
            WindowId::Projects => 0,
            WindowId::About => 1,
            WindowId::Skills => 2,
            WindowId::Contact => 3,
        }
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub w: u16,
    pub h: u16,
}

pub const DEFAULT_WINDOW_SIZE: Size = Size { w: 56, h: 18 };
pub const MINIMIZED_SIZE: Size = Size { w: 24, h: 1 };
/// Top-left corner of the area new windows are scattered over.
pub const WINDOW_ORIGIN: Point = Point::new(14, 1);
const JITTER_X: i32 = 16;
const JITTER_Y: i32 = 6;

#[derive(Debug, Clone)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub is_open: bool,
    pub z_order: u64,
    pub position: Point,
    pub size: Size,
    pub minimized: bool,
}

impl WindowDescriptor {
    pub fn title(&self) -> &'static str {
        self.id.title()
    }

    /// Size the window occupies on screen right now.
    pub fn rendered_size(&self) -> Size {
        if self.minimized {
            MINIMIZED_SIZE
        } else {
            self.size
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        let size = self.rendered_size();
        p.x >= self.position.x
            && p.y >= self.position.y
            && p.x < self.position.x + i32::from(size.w)
            && p.y < self.position.y + i32::from(size.h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    window_id: WindowId,
    dx: i32,
    dy: i32,
}

// ── Desktop ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Desktop {
    windows: Vec<WindowDescriptor>,
    next_z_order: u64,
    dragging: Option<DragState>,
    contact: ContactForm,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }
}

impl Desktop {
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let windows: Vec<WindowDescriptor> = WindowId::ALL
            .iter()
            .zip(1u64..)
            .map(|(&id, z_order)| WindowDescriptor {
                id,
                is_open: false,
                z_order,
                position: Point::new(
                    WINDOW_ORIGIN.x + rng.gen_range(0..=JITTER_X),
                    WINDOW_ORIGIN.y + rng.gen_range(0..=JITTER_Y),
                ),
                size: DEFAULT_WINDOW_SIZE,
                minimized: false,
            })
            .collect();
        let next_z_order = windows.len() as u64 + 1;
        Self {
            windows,
            next_z_order,
            dragging: None,
            contact: ContactForm::default(),
        }
    }

    pub fn windows(&self) -> &[WindowDescriptor] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> &WindowDescriptor {
        &self.windows[id.index()]
    }

    fn window_mut(&mut self, id: WindowId) -> &mut WindowDescriptor {
        &mut self.windows[id.index()]
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Read and bump the allocator in one step.
    fn issue_z_order(&mut self) -> u64 {
        let z = self.next_z_order;
        self.next_z_order += 1;
        z
    }

    /// Desktop icon: a click, then open (or raise) the window.
    pub fn activate_icon(&mut self, id: WindowId, cues: &mut CueQueue) {
        cues.push(Cue::Click);
        self.open(id, cues);
    }

    pub fn open(&mut self, id: WindowId, cues: &mut CueQueue) {
        if self.window(id).is_open {
            self.focus(id);
            return;
        }
        let z = self.issue_z_order();
        let win = self.window_mut(id);
        win.is_open = true;
        win.z_order = z;
        cues.push(Cue::WindowOpen);
        tracing::debug!(window = id.title(), "window opened");
    }

    pub fn focus(&mut self, id: WindowId) {
        let z = self.issue_z_order();
        self.window_mut(id).z_order = z;
    }

    pub fn close(&mut self, id: WindowId, cues: &mut CueQueue) {
        if !self.window(id).is_open {
            return;
        }
        self.window_mut(id).is_open = false;
        if self.dragging.is_some_and(|d| d.window_id == id) {
            self.dragging = None;
        }
        cues.push(Cue::WindowClose);
        tracing::debug!(window = id.title(), "window closed");
    }

    pub fn toggle_minimize(&mut self, id: WindowId, cues: &mut CueQueue) {
        let win = self.window_mut(id);
        win.minimized = !win.minimized;
        cues.push(Cue::Click);
    }

    /// Maximize is not implemented by the desktop; the button only clicks.
    pub fn maximize(&mut self, _id: WindowId, cues: &mut CueQueue) {
        cues.push(Cue::Click);
    }

    // ── Drag ──────────────────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) {
        if !self.window(id).is_open {
            return;
        }
        self.focus(id);
        let pos = self.window(id).position;
        self.dragging = Some(DragState {
            window_id: id,
            dx: pointer.x - pos.x,
            dy: pointer.y - pos.y,
        });
    }

    pub fn drag_to(&mut self, pointer: Point) {
        let Some(drag) = self.dragging else {
            return;
        };
        self.window_mut(drag.window_id).position =
            Point::new(pointer.x - drag.dx, pointer.y - drag.dy);
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<WindowId> {
        self.dragging.map(|d| d.window_id)
    }

    /// Keyboard move of the focused window.
    pub fn nudge(&mut self, id: WindowId, dx: i32, dy: i32) {
        if !self.window(id).is_open {
            return;
        }
        let win = self.window_mut(id);
        win.position = Point::new(win.position.x + dx, win.position.y + dy);
    }

    // ── Stacking ──────────────────────────────────────────────────────────────

    pub fn topmost(&self) -> WindowId {
        self.windows
            .iter()
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
            .unwrap_or(WindowId::Projects)
    }

    /// The topmost open window, if any window is open.
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.is_open)
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
    }

    /// Open windows, bottom first.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut open: Vec<&WindowDescriptor> = self.windows.iter().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| w.z_order);
        open.into_iter().map(|w| w.id).collect()
    }

    /// Raise the bottom-most open window, cycling through all of them.
    pub fn cycle_focus(&mut self) {
        if let Some(&bottom) = self.stacking_order().first() {
            self.focus(bottom);
        }
    }

    /// Topmost open window under the pointer.
    pub fn window_at(&self, p: Point) -> Option<WindowId> {
        self.stacking_order()
            .into_iter()
            .rev()
            .find(|&id| self.window(id).contains(p))
    }

    pub fn tick(&mut self, now: Instant) {
        self.contact.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn desktop() -> Desktop {
        Desktop::with_rng(&mut StdRng::seed_from_u64(7))
    }

    fn z_orders_unique(d: &Desktop) -> bool {
        let mut zs: Vec<u64> = d.windows().iter().map(|w| w.z_order).collect();
        zs.sort_unstable();
        zs.windows(2).all(|p| p[0] < p[1])
    }

    #[test]
    fn focus_after_opening_three_restacks() {
        let mut cues = CueQueue::default();
        let mut d = desktop();
        d.open(WindowId::Projects, &mut cues);
        d.open(WindowId::About, &mut cues);
        d.open(WindowId::Skills, &mut cues);
        d.focus(WindowId::Projects);
        let top_down: Vec<WindowId> = d.stacking_order().into_iter().rev().collect();
        assert_eq!(top_down, vec![WindowId::Projects, WindowId::Skills, WindowId::About]);
        assert_eq!(d.topmost(), WindowId::Projects);
        assert!(z_orders_unique(&d));
    }

    #[test]
    fn reopen_only_restacks() {
        let mut cues = CueQueue::default();
        let mut d = desktop();
        d.open(WindowId::About, &mut cues);
        d.begin_drag(WindowId::About, Point::new(30, 5));
        d.drag_to(Point::new(40, 9));
        d.end_drag();
        let pos = d.window(WindowId::About).position;
        d.open(WindowId::Skills, &mut cues);
        cues.drain();

        d.open(WindowId::About, &mut cues);
        assert!(cues.is_empty());
        assert_eq!(d.window(WindowId::About).position, pos);
        assert_eq!(d.focused(), Some(WindowId::About));
    }

    #[test]
    fn close_keeps_geometry_and_z_order() {
        let mut cues = CueQueue::default();
        let mut d = desktop();
        d.activate_icon(WindowId::Contact, &mut cues);
        let before = d.window(WindowId::Contact).clone();
        d.close(WindowId::Contact, &mut cues);
        let after = d.window(WindowId::Contact);
        assert!(!after.is_open);
        assert_eq!(after.position, before.position);
        assert_eq!(after.z_order, before.z_order);
        assert_eq!(cues.drain(), vec![Cue::Click, Cue::WindowOpen, Cue::WindowClose]);

        d.close(WindowId::Contact, &mut cues);
        assert!(cues.is_empty());
    }

    #[test]
    fn drag_tracks_pointer_from_grab_point() {
        let mut cues = CueQueue::default();
        let mut d = desktop();
        d.open(WindowId::Skills, &mut cues);
        d.open(WindowId::Projects, &mut cues);
        let start = d.window(WindowId::Skills).position;
        let grab = Point::new(start.x + 3, start.y);
        d.begin_drag(WindowId::Skills, grab);
        assert_eq!(d.focused(), Some(WindowId::Skills));
        d.drag_to(Point::new(grab.x + 10, grab.y + 2));
        assert_eq!(d.window(WindowId::Skills).position, Point::new(start.x + 10, start.y + 2));
        d.end_drag();
        d.drag_to(Point::new(0, 0));
        assert_eq!(d.window(WindowId::Skills).position, Point::new(start.x + 10, start.y + 2));
    }

    #[test]
    fn closed_windows_cannot_be_dragged() {
        let mut d = desktop();
        d.begin_drag(WindowId::About, Point::new(20, 2));
        assert_eq!(d.dragging(), None);
    }

    #[test]
    fn minimize_collapses_and_restores_size() {
        let mut cues = CueQueue::default();
        let mut d = desktop();
        d.open(WindowId::Projects, &mut cues);
        d.toggle_minimize(WindowId::Projects, &mut cues);
        assert_eq!(d.window(WindowId::Projects).rendered_size(), MINIMIZED_SIZE);
        d.toggle_minimize(WindowId::Projects, &mut cues);
        assert_eq!(d.window(WindowId::Projects).rendered_size(), DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn initial_positions_stay_inside_jitter_box() {
        for seed in 0..32 {
            let d = Desktop::with_rng(&mut StdRng::seed_from_u64(seed));
            assert!(z_orders_unique(&d));
            for w in d.windows() {
                assert!((WINDOW_ORIGIN.x..=WINDOW_ORIGIN.x + JITTER_X).contains(&w.position.x));
                assert!((WINDOW_ORIGIN.y..=WINDOW_ORIGIN.y + JITTER_Y).contains(&w.position.y));
            }
        }
    }

    #[test]
    fn window_at_prefers_topmost() {
        let mut cues = CueQueue::default();
        let mut d = desktop();
        d.open(WindowId::Projects, &mut cues);
        d.open(WindowId::About, &mut cues);
        let p = d.window(WindowId::About).position;
        let q = d.window(WindowId::Projects).position;
        d.nudge(WindowId::Projects, p.x - q.x, p.y - q.y);
        assert_eq!(d.window_at(p), Some(WindowId::About));
        d.cycle_focus();
        assert_eq!(d.window_at(p), Some(WindowId::Projects));
    }
}
