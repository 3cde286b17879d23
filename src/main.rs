//! userview binary entry point.
//!
//! Parses the command line, initializes logging and the terminal in raw
//! mode, runs the TUI event loop, and restores the terminal state on exit.
//!
use crate::error::Result;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

mod api;
mod app;
mod error;
mod ui;

/// TUI to view user profiles fetched from a remote directory API.
#[derive(Parser, Debug)]
#[command(name = "userview", version, about)]
struct Cli {
    /// Directory endpoint returning a JSON array of user records
    #[arg(long, env = "USERVIEW_ENDPOINT", default_value = api::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Path to the theme configuration file
    #[arg(long, default_value = "theme.conf")]
    theme: String,
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Silent unless RUST_LOG enables something; stderr survives the
    // alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = app::Config {
        endpoint: cli.endpoint,
        theme_path: cli.theme,
    };

    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let res = app::run(&mut terminal, &config);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
