//! Guardian TUI — three-view data quality dashboard.
//!
//! Views:
//! 1. Dashboard — stat cards, quality trend, issues per month
//! 2. Anomaly Detection — expandable anomaly cards
//! 3. AI Summary — weekly narrative report

use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::info;

use guardian_core::provider::provider_for;
use guardian_core::{config, telemetry, AppConfig};
use guardian_tui::{input, ui, AppState};

#[derive(Parser)]
#[command(
    name = "guardian-tui",
    about = "Guardian TUI — vaccination data quality dashboard",
    version
)]
struct Args {
    /// Config file. Defaults to <config_dir>/guardian/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset file (TOML or JSON). Defaults to the built-in dataset.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Log file. Defaults to <data_local_dir>/guardian/guardian.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config::default_path);
    let mut config = AppConfig::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    if args.log_file.is_some() {
        config.log_file = args.log_file;
    }
    if args.data.is_some() {
        config.data_file = args.data;
    }

    telemetry::init_file(&config.log_level, &config.resolved_log_file())
        .context("initializing logging")?;

    // Load the dataset before touching the terminal so errors print normally.
    let provider = provider_for(config.data_file.as_deref());
    let dataset = provider.load().context("loading dataset")?;
    info!(source = %provider.name(), anomalies = dataset.anomalies.len(), "dataset ready");

    let mut app = AppState::new(dataset, provider.name());

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!("guardian-tui exiting");
    result
}

/// Render, then block for the next event. No timers: the screen only
/// changes in response to input.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => input::handle_key(app, key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                input::handle_mouse(app, mouse, screen);
            }
            // Resize just needs the redraw at the top of the loop.
            _ => {}
        }
    }
    Ok(())
}
