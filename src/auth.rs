use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::auth::{AuthGate, CREDENTIAL_HINT, MAX_PASSWORD_LEN};
use crate::ui::{centered_rect, error_style, normal_style, progress_bar, render_centered, title_style};

const FIELD_WIDTH: u16 = MAX_PASSWORD_LEN as u16 + 4;
const NOTE_WIDTH: u16 = 16;

// ── Lock screen ───────────────────────────────────────────────────────────────

pub fn draw_lock_screen(f: &mut Frame, area: Rect, gate: &AuthGate) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_centered(f, rows[1], "[ LOCKED ]", title_style());
    render_centered(f, rows[2], "Enter Password", normal_style());

    let field = centered_rect(FIELD_WIDTH, 3, rows[3]);
    let input = Paragraph::new(Line::from(vec![
        Span::styled(gate.buffer().to_string(), normal_style()),
        Span::styled("_", normal_style().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(normal_style()));
    f.render_widget(input, field);

    if gate.error_flag() {
        render_centered(f, rows[4], "Incorrect password", error_style());
    }

    draw_sticky_note(f, area);
}

/// The yellow note stuck to the corner of the screen.
fn draw_sticky_note(f: &mut Frame, area: Rect) {
    if area.width < NOTE_WIDTH + 2 || area.height < 5 {
        return;
    }
    let note = Rect {
        x: area.x + area.width - NOTE_WIDTH - 1,
        y: area.y + 1,
        width: NOTE_WIDTH,
        height: 4,
    };
    let style = Style::default().fg(Color::Red).bg(Color::LightYellow);
    let lines = vec![
        Line::from(Span::styled("Password:", style.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(CREDENTIAL_HINT, style)),
    ];
    f.render_widget(
        Paragraph::new(lines).block(Block::default().style(style)).style(style),
        note,
    );
}

// ── Loading ───────────────────────────────────────────────────────────────────

pub fn draw_loading(f: &mut Frame, area: Rect, progress: u8) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_centered(f, rows[1], "Loading System", title_style());
    let width = usize::from(area.width.saturating_sub(8).min(34));
    render_centered(f, rows[2], &progress_bar(progress, width), normal_style());
    render_centered(f, rows[3], &format!("{progress}%"), normal_style());
}
