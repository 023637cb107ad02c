use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::core::OpenMode;

// ── Paths ─────────────────────────────────────────────────────────────────────

pub fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `settings.json` beside the executable, then the user config dir.
pub fn default_settings_file() -> PathBuf {
    let local = base_dir().join("settings.json");
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|d| d.join("portfolio-os").join("settings.json"))
        .unwrap_or(local)
}

pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("portfolio-os.log")
}

// ── JSON helpers ──────────────────────────────────────────────────────────────

pub fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub sound: bool,
    pub open_mode: OpenMode,
    pub theme: String,
    pub power_on_at_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            open_mode: OpenMode::Desktop,
            theme: "green".into(),
            power_on_at_start: false,
        }
    }
}

/// Settings are read once and never written back. A missing file is normal;
/// an unreadable one is logged and ignored.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    match load_json(path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("falling back to default settings: {err:#}");
            Settings::default()
        }
    }
}

// ── Theme ─────────────────────────────────────────────────────────────────────

pub const THEMES: &[(&str, Color)] = &[
    ("green", Color::Green),
    ("amber", Color::Yellow),
    ("white", Color::White),
    ("blue", Color::Cyan),
];

pub fn theme_color(name: &str) -> Color {
    THEMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
        .unwrap_or(Color::Green)
}

static CURRENT_THEME: OnceLock<Color> = OnceLock::new();

/// Chosen once at startup; later calls are ignored.
pub fn set_current_theme(name: &str) {
    let _ = CURRENT_THEME.set(theme_color(name));
}

pub fn current_theme_color() -> Color {
    CURRENT_THEME.get().copied().unwrap_or(Color::Green)
}

// ── Branding ──────────────────────────────────────────────────────────────────

pub const OS_NAME: &str = "PortfolioOS 1.0";

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings(&dir.path().join("nope.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "open_mode": "terminal", "theme": "amber" }}"#).unwrap();
        let s = load_settings(f.path());
        assert_eq!(s.open_mode, OpenMode::Terminal);
        assert_eq!(s.theme, "amber");
        assert!(s.sound);
        assert!(!s.power_on_at_start);
    }

    #[test]
    fn malformed_file_falls_back() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        assert_eq!(load_settings(f.path()), Settings::default());
    }

    #[test]
    fn unknown_theme_is_green() {
        assert_eq!(theme_color("Amber"), Color::Yellow);
        assert_eq!(theme_color("plaid"), Color::Green);
    }
}
