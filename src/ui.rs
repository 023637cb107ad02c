use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::config::current_theme_color;

pub type Term = Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>;

// ── Padding ───────────────────────────────────────────────────────────────────
// Horizontal padding applied to text screens so lines never touch the bezel.
const H_PAD: u16 = 3;

/// Shrink a rect by H_PAD columns on each side.
pub fn pad_horizontal(area: Rect) -> Rect {
    let pad = H_PAD.min(area.width / 2);
    Rect {
        x: area.x + pad,
        y: area.y,
        width: area.width.saturating_sub(pad * 2),
        height: area.height,
    }
}

/// A `w`×`h` rect centred in `area`, shrunk to fit.
pub fn centered_rect(w: u16, h: u16, area: Rect) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

pub fn point_in_rect(x: u16, y: u16, r: Rect) -> bool {
    x >= r.x && x < r.x.saturating_add(r.width) && y >= r.y && y < r.y.saturating_add(r.height)
}

/// Overwrite `buf` from `start`, dropping whatever does not fit.
pub fn write_text(buf: &mut [char], start: usize, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        let idx = start + i;
        if idx >= buf.len() {
            break;
        }
        buf[idx] = ch;
    }
}

// ── Color helpers ─────────────────────────────────────────────────────────────

pub fn normal_style()   -> Style { Style::default().fg(current_theme_color()) }
pub fn sel_style()      -> Style { Style::default().fg(Color::Black).bg(current_theme_color()).add_modifier(Modifier::BOLD) }
pub fn title_style()    -> Style { Style::default().fg(current_theme_color()).add_modifier(Modifier::BOLD) }
pub fn dim_style()      -> Style { Style::default().fg(current_theme_color()).add_modifier(Modifier::DIM) }
pub fn error_style()    -> Style { Style::default().fg(Color::Red).add_modifier(Modifier::BOLD) }

// ── Widgets ───────────────────────────────────────────────────────────────────

/// `[#####.....]` filled to `pct` percent, `width` cells wide including brackets.
pub fn progress_bar(pct: u8, width: usize) -> String {
    let inner = width.saturating_sub(2);
    let filled = inner * usize::from(pct.min(100)) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(inner - filled))
}

pub fn render_lines(f: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    f.render_widget(Paragraph::new(lines), area);
}

pub fn render_centered(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let p = Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
        .alignment(Alignment::Center);
    f.render_widget(p, area);
}
