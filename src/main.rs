use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Instant;

use portfolio_os::app::{self, App};
use portfolio_os::config::{self, load_settings, set_current_theme};
use portfolio_os::core::{Machine, OpenMode};
use portfolio_os::logging;
use portfolio_os::sound::AudioDispatcher;
use portfolio_os::ui::Term;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Desktop,
    Terminal,
}

impl From<ModeArg> for OpenMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Desktop => OpenMode::Desktop,
            ModeArg::Terminal => OpenMode::Terminal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "portfolio-os")]
#[command(about = "A portfolio dressed up as a retro laptop, in your terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Path to settings.json (default: next to the executable)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the log file (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start with sound muted
    #[arg(long)]
    mute: bool,

    /// Shell shown after login
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Press the power button on startup
    #[arg(long)]
    power_on: bool,
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = args.log_file.unwrap_or_else(config::default_log_file);
    if let Err(err) = logging::init(&log_file) {
        eprintln!("Logging disabled: {err:#}");
    }

    let settings_path = args.config.unwrap_or_else(config::default_settings_file);
    let settings = load_settings(&settings_path);
    tracing::info!(path = %settings_path.display(), ?settings, "starting");
    set_current_theme(&settings.theme);

    let mode = args.mode.map(OpenMode::from).unwrap_or(settings.open_mode);
    let mut machine = Machine::new(mode);
    if args.power_on || settings.power_on_at_start {
        machine.toggle_power(Instant::now());
    }
    let audio = AudioDispatcher::new(settings.sound, args.mute);
    let mut app = App::new(machine, audio);

    let mut terminal = init_terminal()?;

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        app::run(&mut terminal, &mut app)
    }));

    // Always restore terminal
    restore_terminal(&mut terminal).ok();

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            tracing::error!("exited with error: {e:#}");
            Err(e)
        }
        Err(_) => {
            tracing::error!("event loop panicked");
            eprintln!("PortfolioOS crashed. Check {}", log_file.display());
            std::process::exit(101);
        }
    }
}
