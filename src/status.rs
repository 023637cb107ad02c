use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::{Machine, OpenMode};
use crate::ui::{sel_style, write_text};

// ── Laptop chrome ─────────────────────────────────────────────────────────────
// The strip above the display stands in for the hardware: power button,
// charger cable, speaker and the mode switch.

pub fn chrome_text(machine: &Machine, muted: bool, width: usize) -> String {
    let power = if machine.is_powered() { "ON " } else { "OFF" };
    let charger = if machine.battery().is_charging() { "IN " } else { "OUT" };
    let sound = if muted { "MUTED" } else { "ON   " };
    let mode = match machine.mode() {
        OpenMode::Desktop => "DESKTOP ",
        OpenMode::Terminal => "TERMINAL",
    };
    let left = format!(
        " F10 Power:{power}  F9 Charger:{charger}  F8 Sound:{sound}  F6 {mode}"
    );
    let right = format!("BAT {:>3}% ", machine.battery().level());

    let mut row = vec![' '; width];
    write_text(&mut row, 0, &left);
    let right_len = right.chars().count();
    if width >= left.chars().count() + right_len {
        write_text(&mut row, width - right_len, &right);
    }
    row.into_iter().collect()
}

pub fn render_status_bar(f: &mut Frame, area: Rect, machine: &Machine, muted: bool) {
    if area.height == 0 {
        return;
    }
    let line = chrome_text(machine, muted, area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(line, sel_style()))),
        area,
    );
}
