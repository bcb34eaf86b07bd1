//! matchdeck - a dating app screen in the terminal
//!
//! A static, clickable mock of the "Likes You" flow:
//! - Five bottom tabs, tappable by mouse or reachable with 1-5
//! - A placeholder discovery feed with a rose notice on top
//! - One hard-coded incoming like behind the Matches tab
//!
//! Nothing talks to a network and nothing is persisted.
//!
//! Usage: matchdeck [--theme <name>] [--no-mouse]

mod app;
mod config;
mod deck;
mod layout;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::ThemeName;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs;
use std::io::stdout;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Command line options
#[derive(Debug, Parser)]
#[command(
    name = "matchdeck",
    version,
    about = "A clickable terminal mock-up of a dating app's Likes You screen"
)]
struct Args {
    /// Theme for this run: hinge, midnight, or transparent
    #[arg(long, value_parser = ["hinge", "midnight", "transparent"])]
    theme: Option<String>,

    /// Keyboard navigation only; leave the mouse to the terminal
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = init_logging()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "matchdeck starting");

    let result = run_app(&args);

    // Terminal state is restored by now, safe to print
    if let Err(e) = result {
        tracing::error!("fatal: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("matchdeck exiting");
    Ok(())
}

/// Initialize file logging; stdout belongs to the TUI
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("matchdeck");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "matchdeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_env("MATCHDECK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn run_app(args: &Args) -> Result<()> {
    // Load configuration, then let the command line override the theme
    let mut config = config::Config::load().context("Failed to load configuration")?;
    if let Some(name) = args.theme.as_deref() {
        if let Some(theme) = ThemeName::parse(name) {
            config.theme = theme;
        }
    }
    tracing::info!(theme = config.theme.as_str(), "configuration resolved");

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if !args.no_mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to capture mouse")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Always restore terminal state, even on error
    disable_raw_mode().context("Failed to disable raw mode")?;
    if !args.no_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to release mouse")?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Poll with a timeout so the status shim clock stays current
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
