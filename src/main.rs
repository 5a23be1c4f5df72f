//! cinetui - terminal viewer for TMDB movie details
//!
//! # Usage
//!
//! ```bash
//! # Interactive detail view
//! cinetui 550
//!
//! # CLI mode (for automation)
//! cinetui info 550 --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cinetui::api::TmdbClient;
use cinetui::app::App;
use cinetui::cli::{validate_movie_id, Cli, Command, ExitCode, Output};
use cinetui::commands;
use cinetui::fetch::{FetchState, Fetcher};
use cinetui::models::MovieDetail;
use cinetui::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    }

    // TUI mode: a movie id is required
    let output = Output::new(&cli);
    let movie_id = match &cli.movie_id {
        Some(raw) => match validate_movie_id(raw) {
            Ok(id) => id,
            Err(msg) => {
                output.error(msg, ExitCode::InvalidArgs);
                std::process::exit(ExitCode::InvalidArgs.into());
            }
        },
        None => {
            output.error(
                "A movie id is required. Try: cinetui 550",
                ExitCode::InvalidArgs,
            );
            std::process::exit(ExitCode::InvalidArgs.into());
        }
    };

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output.error(format!("Failed to read config: {}", e), ExitCode::Error);
            std::process::exit(ExitCode::Error.into());
        }
    };
    let api_key = match config.tmdb_api_key() {
        Ok(key) => key,
        Err(e) => {
            output.error(e.to_string(), ExitCode::Error);
            std::process::exit(ExitCode::Error.into());
        }
    };

    run_tui(movie_id, api_key).await
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Info(cmd)) => commands::info_cmd(cmd, config_path, &output).await,
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(movie_id: u64, api_key: String) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(movie_id);
    let client = TmdbClient::new(api_key);

    // Land directly on the detail view; Home stays reachable via back
    app.open_detail();

    let result = run_event_loop(&mut terminal, &mut app, &client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, drives the fetch, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: &TmdbClient) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let mut fetcher: Option<Fetcher<MovieDetail>> = None;

    while app.running {
        // Start a fetch if one was requested; replacing the handle aborts
        // any fetch still in flight
        if app.take_fetch_request() {
            let client = client.clone();
            let movie_id = app.detail.movie_id;
            app.detail.fetch = FetchState::Loading;
            fetcher = Some(Fetcher::spawn(
                async move { client.movie_detail(movie_id).await },
            ));
        }

        // Collect a finished fetch
        let finished = fetcher.as_mut().and_then(|active| active.try_take());
        if let Some(result) = finished {
            app.detail.fetch = match result {
                Ok(movie) => FetchState::Loaded(movie),
                Err(err) => FetchState::Failed(err),
            };
            app.detail.scroll = 0;
            fetcher = None;
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with timeout so fetch results surface promptly
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
