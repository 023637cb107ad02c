use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::{CONTACT_LINKS, EDUCATION, EXPERIENCE, PROJECTS, SKILL_TAGS};
use crate::core::battery::Battery;
use crate::core::terminal::{PortfolioTerminal, Section, MENU};
use crate::ui::{
    dim_style, error_style, normal_style, pad_horizontal, progress_bar, render_centered, sel_style,
    title_style,
};

pub const DEPLETED_MESSAGE: &str = "BATTERY DEPLETED - PLEASE CONNECT CHARGER";

// ── Section bodies ────────────────────────────────────────────────────────────

pub fn section_lines(term: &PortfolioTerminal) -> Vec<Line<'static>> {
    let heading = |s: Section| {
        vec![
            Line::from(Span::styled(format!("> {}", s.title()), title_style())),
            Line::from(""),
        ]
    };
    let mut lines = Vec::new();
    match term.section() {
        Section::Welcome => {
            for l in term.typed_text().lines() {
                lines.push(Line::from(Span::styled(l.to_string(), normal_style())));
            }
            if term.is_typing() || term.typed_text().is_empty() {
                lines.push(Line::from(Span::styled("_", normal_style())));
            }
        }
        Section::Portfolio => {
            lines.extend(heading(Section::Portfolio));
            for (i, item) in MENU.iter().enumerate() {
                if i == term.menu_cursor() {
                    lines.push(Line::from(Span::styled(
                        format!("  > {}", item.menu_label()),
                        sel_style(),
                    )));
                } else {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", item.menu_label()),
                        normal_style(),
                    )));
                }
            }
        }
        Section::Contact => {
            lines.extend(heading(Section::Contact));
            for link in CONTACT_LINKS {
                let text = link.url.unwrap_or(link.text);
                lines.push(Line::from(Span::styled(format!("  {text}"), normal_style())));
            }
        }
        Section::Skills => {
            lines.extend(heading(Section::Skills));
            for group in SKILL_TAGS {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<12}", group.title), title_style()),
                    Span::styled(group.tags.join(" | "), normal_style()),
                ]));
            }
        }
        Section::Education => {
            lines.extend(heading(Section::Education));
            for e in EDUCATION {
                lines.push(Line::from(Span::styled(format!("  {}", e.degree), title_style())));
                let place = match e.location {
                    Some(loc) => format!("  {} | {} | {loc}", e.school, e.period),
                    None => format!("  {} | {}", e.school, e.period),
                };
                lines.push(Line::from(Span::styled(place, dim_style())));
                lines.push(Line::from(""));
            }
        }
        Section::Experience => {
            lines.extend(heading(Section::Experience));
            for x in EXPERIENCE {
                lines.push(Line::from(Span::styled(
                    format!("  {} - {}", x.company, x.role),
                    title_style(),
                )));
                lines.push(Line::from(Span::styled(format!("  {}", x.period), dim_style())));
                for d in x.details {
                    lines.push(Line::from(Span::styled(format!("   * {d}"), normal_style())));
                }
                lines.push(Line::from(""));
            }
        }
        Section::Projects => {
            lines.extend(heading(Section::Projects));
            for p in PROJECTS {
                lines.push(Line::from(Span::styled(format!("  {}", p.title), title_style())));
                lines.push(Line::from(Span::styled(
                    format!("  {} | {}", p.period, p.team),
                    dim_style(),
                )));
                for h in p.highlights {
                    lines.push(Line::from(Span::styled(format!("   * {h}"), normal_style())));
                }
                lines.push(Line::from(Span::styled(
                    format!("  Technologies: {}", p.tech.join(", ")),
                    normal_style(),
                )));
                if let Some(url) = p.github {
                    lines.push(Line::from(Span::styled(format!("  {url}"), dim_style())));
                }
                lines.push(Line::from(""));
            }
        }
    }
    lines
}

fn footer_line(term: &PortfolioTerminal, battery: &Battery) -> Line<'static> {
    let bolt = if battery.is_charging() { " +" } else { "" };
    let mut spans = vec![Span::styled(
        format!("{} {}%{bolt}", progress_bar(battery.level(), 12), battery.level()),
        if battery.is_charging() {
            normal_style().fg(Color::Yellow)
        } else {
            normal_style()
        },
    )];
    let hint = match term.section() {
        Section::Portfolio => "   Up/Down select  Enter open",
        _ => "   Left/Right prev/next  Esc back to menu",
    };
    spans.push(Span::styled(hint, dim_style()));
    Line::from(spans)
}

// ── Screen ────────────────────────────────────────────────────────────────────

pub fn draw_terminal(f: &mut Frame, area: Rect, term: &PortfolioTerminal, battery: &Battery) {
    if battery.is_depleted() {
        let row = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        render_centered(f, row, DEPLETED_MESSAGE, error_style());
        return;
    }

    let welcome = term.section() == Section::Welcome;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(if welcome { 0 } else { 2 }),
        ])
        .split(pad_horizontal(area));

    let body = Paragraph::new(section_lines(term)).wrap(Wrap { trim: false });
    if welcome {
        // Typewriter text sits in the middle of the screen.
        let top = (chunks[0].height / 2).saturating_sub(1);
        let area = Rect {
            y: chunks[0].y + top,
            height: chunks[0].height - top,
            ..chunks[0]
        };
        f.render_widget(body.alignment(Alignment::Center), area);
        return;
    }

    if term.content_visible() {
        let area = Rect {
            y: chunks[0].y + 1,
            height: chunks[0].height.saturating_sub(1),
            ..chunks[0]
        };
        f.render_widget(body, area);
    }
    let footer = Paragraph::new(footer_line(term, battery))
        .block(Block::default().borders(Borders::TOP).border_style(dim_style()));
    f.render_widget(footer, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cue::CueQueue;
    use crate::core::terminal::WELCOME_HOLD_MS;
    use crate::core::timer::ms;
    use std::time::Instant;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn welcome_shows_cursor_until_typed() {
        let term = PortfolioTerminal::start(Instant::now());
        assert_eq!(plain(&section_lines(&term)), vec!["_".to_string()]);
    }

    #[test]
    fn menu_marks_cursor() {
        let t0 = Instant::now();
        let mut cues = CueQueue::default();
        let mut term = PortfolioTerminal::start(t0);
        term.tick(t0 + ms(WELCOME_HOLD_MS), &mut cues);
        term.menu_down();
        let text = plain(&section_lines(&term));
        assert_eq!(text[0], "> Portfolio Navigation");
        assert!(text.contains(&"  > Skills".to_string()));
        assert!(text.contains(&"    Contact".to_string()));
    }
}
