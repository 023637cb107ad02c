use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::OS_NAME;
use crate::content::{CONTACT_LINKS, PROFILE, PROJECTS, SKILL_GROUPS};
use crate::core::contact::{ContactField, ContactForm, FormStatus};
use crate::core::desktop::{Desktop, Point, WindowDescriptor, WindowId};
use crate::ui::{
    dim_style, error_style, normal_style, point_in_rect, progress_bar, sel_style, title_style,
    write_text,
};

const ICON_WIDTH: u16 = 12;
const ICON_HEIGHT: u16 = 3;
const ICON_GAP: u16 = 1;
const TITLE_MIN_BUTTON: &str = "[_]";
const TITLE_MAX_BUTTON: &str = "[\u{25a1}]";
const TITLE_CLOSE_BUTTON: &str = "[x]";
const BUTTON_WIDTH: i32 = 3;
const BUTTONS_WIDTH: i32 = BUTTON_WIDTH * 3;
const TASK_SOUND_ON: &str = "[SND ON ]";
const TASK_SOUND_OFF: &str = "[SND OFF]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHit {
    Minimize,
    Maximize,
    Close,
    Title,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopHit {
    Icon(WindowId),
    Window(WindowId, WindowHit),
    SoundToggle,
    Background,
}

// ── Layout ────────────────────────────────────────────────────────────────────

pub fn taskbar_area(size: Rect) -> Rect {
    Rect {
        x: size.x,
        y: size.y + size.height.saturating_sub(1),
        width: size.width,
        height: if size.height > 1 { 1 } else { 0 },
    }
}

pub fn desktop_area(size: Rect) -> Rect {
    let bottom = if size.height > 1 { 1 } else { 0 };
    Rect {
        height: size.height.saturating_sub(bottom),
        ..size
    }
}

fn icon_label(id: WindowId) -> &'static str {
    match id {
        WindowId::Projects => "[DIR]",
        WindowId::About => "[USR]",
        WindowId::Skills => "[CFG]",
        WindowId::Contact => "[TEL]",
    }
}

pub fn icon_rect(desk: Rect, idx: usize) -> Rect {
    Rect {
        x: desk.x + 1,
        y: desk.y + 1 + idx as u16 * (ICON_HEIGHT + ICON_GAP),
        width: ICON_WIDTH,
        height: ICON_HEIGHT,
    }
}

fn sound_button_rect(task: Rect) -> Rect {
    let w = TASK_SOUND_ON.chars().count() as u16;
    let start = OS_NAME.chars().count() as u16 + 3;
    Rect {
        x: task.x + start,
        y: task.y,
        width: w.min(task.width.saturating_sub(start)),
        height: task.height,
    }
}

/// Desktop-local coordinates of a screen cell.
pub fn to_local(desk: Rect, x: u16, y: u16) -> Point {
    Point::new(i32::from(x) - i32::from(desk.x), i32::from(y) - i32::from(desk.y))
}

/// Column of the first title button relative to the window's left edge.
fn buttons_offset(win: &WindowDescriptor) -> i32 {
    let w = i32::from(win.rendered_size().w);
    if win.minimized {
        w - BUTTONS_WIDTH
    } else {
        w - 1 - BUTTONS_WIDTH
    }
}

/// On-screen part of a window, clipped to the desktop. `None` when fully
/// dragged out of view.
fn visible_rect(desk: Rect, win: &WindowDescriptor) -> Option<(Rect, u16)> {
    let size = win.rendered_size();
    let x0 = i32::from(desk.x) + win.position.x;
    let y0 = i32::from(desk.y) + win.position.y;
    let x1 = (x0 + i32::from(size.w)).min(i32::from(desk.x) + i32::from(desk.width));
    let y1 = (y0 + i32::from(size.h)).min(i32::from(desk.y) + i32::from(desk.height));
    let cx = x0.max(i32::from(desk.x));
    let cy = y0.max(i32::from(desk.y));
    if cx >= x1 || cy >= y1 {
        return None;
    }
    let rect = Rect {
        x: u16::try_from(cx).ok()?,
        y: u16::try_from(cy).ok()?,
        width: u16::try_from(x1 - cx).ok()?,
        height: u16::try_from(y1 - cy).ok()?,
    };
    let clipped_left = u16::try_from(cx - x0).ok()?;
    Some((rect, clipped_left))
}

// ── Hit testing ───────────────────────────────────────────────────────────────

pub fn hit_window(desktop: &Desktop, desk: Rect, x: u16, y: u16) -> Option<(WindowId, WindowHit)> {
    if !point_in_rect(x, y, desk) {
        return None;
    }
    let p = to_local(desk, x, y);
    let id = desktop.window_at(p)?;
    let win = desktop.window(id);
    let rx = p.x - win.position.x;
    if p.y != win.position.y {
        return Some((id, WindowHit::Content));
    }
    let off = buttons_offset(win);
    let hit = if (off..off + BUTTONS_WIDTH).contains(&rx) {
        match (rx - off) / BUTTON_WIDTH {
            0 => WindowHit::Minimize,
            1 => WindowHit::Maximize,
            _ => WindowHit::Close,
        }
    } else {
        WindowHit::Title
    };
    Some((id, hit))
}

pub fn hit_test(desktop: &Desktop, size: Rect, x: u16, y: u16) -> DesktopHit {
    let desk = desktop_area(size);
    let task = taskbar_area(size);
    if point_in_rect(x, y, sound_button_rect(task)) {
        return DesktopHit::SoundToggle;
    }
    if let Some((id, hit)) = hit_window(desktop, desk, x, y) {
        return DesktopHit::Window(id, hit);
    }
    WindowId::ALL
        .iter()
        .enumerate()
        .find(|(i, _)| point_in_rect(x, y, icon_rect(desk, *i)))
        .map(|(_, &id)| DesktopHit::Icon(id))
        .unwrap_or(DesktopHit::Background)
}

// ── Drawing ───────────────────────────────────────────────────────────────────

pub fn draw_desktop(f: &mut Frame, size: Rect, desktop: &Desktop, muted: bool) {
    let desk = desktop_area(size);
    f.render_widget(Clear, size);
    draw_icons(f, desk);

    let focused = desktop.focused();
    for id in desktop.stacking_order() {
        draw_window(f, desk, desktop, desktop.window(id), focused == Some(id));
    }
    draw_taskbar(f, taskbar_area(size), muted);
}

fn draw_icons(f: &mut Frame, desk: Rect) {
    for (i, &id) in WindowId::ALL.iter().enumerate() {
        let area = icon_rect(desk, i);
        if area.y + area.height > desk.y + desk.height {
            break;
        }
        let lines = vec![
            Line::from(Span::styled(format!("   {}", icon_label(id)), title_style())),
            Line::from(Span::styled(id.title(), normal_style())),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }
}

fn draw_taskbar(f: &mut Frame, area: Rect, muted: bool) {
    if area.height == 0 {
        return;
    }
    let width = area.width as usize;
    let mut row = vec![' '; width];
    write_text(&mut row, 1, OS_NAME);
    let sound = sound_button_rect(area);
    write_text(
        &mut row,
        usize::from(sound.x - area.x),
        if muted { TASK_SOUND_OFF } else { TASK_SOUND_ON },
    );
    let clock = Local::now().format("%H:%M").to_string();
    if width > clock.len() + 1 {
        write_text(&mut row, width - clock.len() - 1, &clock);
    }
    let line: String = row.into_iter().collect();
    f.render_widget(Paragraph::new(Line::from(Span::styled(line, sel_style()))), area);
}

fn title_row(win: &WindowDescriptor, width: usize) -> String {
    let mut chars = vec![' '; width];
    write_text(&mut chars, 1, win.title());
    let buttons = format!("{TITLE_MIN_BUTTON}{TITLE_MAX_BUTTON}{TITLE_CLOSE_BUTTON}");
    if let Ok(off) = usize::try_from(buttons_offset(win)) {
        write_text(&mut chars, off, &buttons);
    }
    chars.into_iter().collect()
}

fn draw_window(f: &mut Frame, desk: Rect, desktop: &Desktop, win: &WindowDescriptor, focused: bool) {
    let Some((area, clipped_left)) = visible_rect(desk, win) else {
        return;
    };
    f.render_widget(Clear, area);

    let title_color = if focused { sel_style() } else { dim_style() };
    let full_width = usize::from(win.rendered_size().w);
    let title: String = title_row(win, full_width)
        .chars()
        .skip(usize::from(clipped_left))
        .take(usize::from(area.width))
        .collect();
    let title_visible = i32::from(area.y) == i32::from(desk.y) + win.position.y;

    if win.minimized {
        if title_visible {
            f.render_widget(Paragraph::new(Span::styled(title, title_color)), area);
        }
        return;
    }

    let border_style = if focused { title_style() } else { dim_style() };
    f.render_widget(Block::default().borders(Borders::ALL).style(border_style), area);
    if title_visible && area.width > 2 {
        let inner_title: String = title.chars().skip(1).take(usize::from(area.width - 2)).collect();
        f.render_widget(
            Paragraph::new(Span::styled(inner_title, title_color)),
            Rect { x: area.x + 1, width: area.width - 2, height: 1, ..area },
        );
    }

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let lines = match win.id {
        WindowId::About => about_lines(),
        WindowId::Projects => project_lines(),
        WindowId::Skills => skill_lines(usize::from(inner.width)),
        WindowId::Contact => contact_lines(desktop.contact(), focused),
    };
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ── Window content ────────────────────────────────────────────────────────────

fn about_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(PROFILE.name, title_style())),
        Line::from(Span::styled(PROFILE.role, normal_style())),
        Line::from(""),
        Line::from(Span::styled(PROFILE.bio, normal_style())),
        Line::from(""),
        Line::from(Span::styled(format!("Email:    {}", PROFILE.email), normal_style())),
        Line::from(Span::styled(format!("Location: {}", PROFILE.location), normal_style())),
        Line::from(Span::styled(PROFILE.availability, title_style())),
        Line::from(Span::styled(format!("Build {}", PROFILE.build), dim_style())),
    ]
}

fn project_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for p in PROJECTS {
        lines.push(Line::from(vec![
            Span::styled(p.title, title_style()),
            Span::styled(format!("  {} / {}", p.period, p.team), dim_style()),
        ]));
        lines.push(Line::from(Span::styled(p.summary, normal_style())));
        lines.push(Line::from(Span::styled(
            format!("Tech: {}", p.tech.join(", ")),
            dim_style(),
        )));
        if let Some(url) = p.github {
            lines.push(Line::from(Span::styled(url, dim_style())));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn skill_lines(width: usize) -> Vec<Line<'static>> {
    let bar_width = width.saturating_sub(30).clamp(6, 22);
    let mut lines = Vec::new();
    for group in SKILL_GROUPS {
        lines.push(Line::from(Span::styled(group.title, title_style())));
        for skill in group.skills {
            lines.push(Line::from(Span::styled(
                format!(
                    " {:<24}{} {:>3}%",
                    skill.name,
                    progress_bar(skill.level, bar_width),
                    skill.level
                ),
                normal_style(),
            )));
        }
    }
    lines
}

fn contact_lines(form: &ContactForm, focused: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = CONTACT_LINKS
        .iter()
        .map(|link| Line::from(Span::styled(link.text, normal_style())))
        .collect();
    lines.push(Line::from(""));

    if form.status() == FormStatus::Sent {
        lines.push(Line::from(Span::styled("Message sent!", title_style())));
        lines.push(Line::from(Span::styled("Enter  send another message", dim_style())));
        return lines;
    }

    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        let active = focused && form.active() == field;
        let marker = if active { ">" } else { " " };
        let style = if active { sel_style() } else { normal_style() };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<8}", field.label()), normal_style()),
            Span::styled(format!(" {} ", form.field(field)), style),
        ]));
    }
    lines.push(Line::from(""));
    let status = match form.status() {
        FormStatus::Submitting => Span::styled("Sending...", title_style()),
        _ if form.has_error() => Span::styled("Please fill in every field", error_style()),
        _ => Span::styled("Up/Down field  Enter send", dim_style()),
    };
    lines.push(Line::from(status));
    lines
}
