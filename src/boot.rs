use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use crate::config::OS_NAME;
use crate::core::boot::BootPhase;
use crate::ui::{dim_style, normal_style, pad_horizontal, render_lines, title_style};

const DRIVE_BLOCKS: usize = 20;

/// POST text shown for a phase. Each phase repeats the previous one and
/// extends it, so the screen appears to scroll forward.
pub fn bios_lines(phase: BootPhase) -> Vec<String> {
    if phase == BootPhase::Off {
        return Vec::new();
    }
    let mut lines = vec![
        "BIOS Version 2.5".to_string(),
        "Copyright (C) 1995-2025".to_string(),
        String::new(),
        "Memory Test: 640K OK".to_string(),
    ];
    match phase {
        BootPhase::Bios1 => lines.push("Detecting Drives...".into()),
        _ => {
            lines.push("Detecting Drives... Done".into());
            lines.push("Hard Disk 0: 500MB".into());
            lines.push("Floppy Disk: 1.44MB".into());
            lines.push(String::new());
            let (status, filled) = match phase {
                BootPhase::Bios2 => ("", DRIVE_BLOCKS / 2),
                _ => (" Done", DRIVE_BLOCKS),
            };
            lines.push(format!("Loading operating system...{status}"));
            lines.push(format!(
                "{}{}",
                "\u{2588}".repeat(filled),
                " ".repeat(DRIVE_BLOCKS - filled)
            ));
            if phase >= BootPhase::Bios3 {
                lines.push(String::new());
                lines.push(format!("{OS_NAME} Starting..."));
            }
        }
    }
    lines
}

pub fn draw_boot(f: &mut Frame, area: Rect, phase: BootPhase) {
    let lines = bios_lines(phase);
    let last = lines.len().saturating_sub(1);
    let text: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            let style = if phase == BootPhase::Bios3 && i == last {
                title_style()
            } else {
                normal_style()
            };
            Line::from(Span::styled(l, style))
        })
        .collect();
    let inner = pad_horizontal(Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    });
    render_lines(f, inner, text);
}

/// Blank display with a hint, shown while the laptop is off.
pub fn draw_powered_off(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let hint = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    crate::ui::render_centered(f, hint, "F10  power on", dim_style());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_screen_is_blank() {
        assert!(bios_lines(BootPhase::Off).is_empty());
    }

    #[test]
    fn each_phase_extends_the_last() {
        let b1 = bios_lines(BootPhase::Bios1);
        let b2 = bios_lines(BootPhase::Bios2);
        let b3 = bios_lines(BootPhase::Bios3);
        assert_eq!(b1.last().map(String::as_str), Some("Detecting Drives..."));
        assert!(b2.contains(&"Loading operating system...".to_string()));
        assert!(b3.contains(&"Loading operating system... Done".to_string()));
        assert_eq!(b3.last(), Some(&format!("{OS_NAME} Starting...")));
        assert!(b1.len() < b2.len() && b2.len() < b3.len());
    }
}
