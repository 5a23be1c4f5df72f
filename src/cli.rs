//! CLI - Command line interface for cinetui
//!
//! Run with a movie id to launch the interactive TUI.
//! Use the `info` subcommand for scriptable output.
//!
//! # Examples
//!
//! ```bash
//! # Interactive detail view
//! cinetui 550
//!
//! # Print details to stdout
//! cinetui info 550
//! cinetui info 550 --json
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Movie not found
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// cinetui - terminal viewer for TMDB movie details
///
/// Pass a movie id to launch the interactive TUI.
/// Use the `info` subcommand for automation and scripting.
#[derive(Parser, Debug)]
#[command(
    name = "cinetui",
    version,
    about = "Terminal viewer for TMDB movie details",
    after_help = "EXAMPLES:\n\
                  cinetui 550                 Open the detail view for movie 550\n\
                  cinetui info 550            Print details as text\n\
                  cinetui info 550 --json     Print details as JSON"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// TMDB movie id to open in the TUI
    #[arg(value_name = "MOVIE_ID")]
    pub movie_id: Option<String>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print details for a movie
    #[command(visible_alias = "i")]
    Info(InfoCmd),
}

/// Print detailed information about a movie
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// TMDB movie id (e.g., 550)
    #[arg(required = true)]
    pub id: String,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print raw JSON (already formatted)
    pub fn print_json<T: Serialize>(&self, data: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(data)?);
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Movie ID Validation
// =============================================================================

/// Validate a TMDB movie id (decimal digits, nonzero)
pub fn validate_movie_id(id: &str) -> Result<u64, &'static str> {
    match id.parse::<u64>() {
        Ok(0) => Err("Invalid movie id (must be a positive integer)"),
        Ok(n) => Ok(n),
        Err(_) => Err("Invalid movie id (expected a TMDB numeric id, e.g. 550)"),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_movie_id_is_tui_mode() {
        let cli = Cli::parse_from(["cinetui", "550"]);
        assert!(!cli.is_cli_mode());
        assert_eq!(cli.movie_id.as_deref(), Some("550"));
    }

    #[test]
    fn test_info_command() {
        let cli = Cli::parse_from(["cinetui", "info", "550"]);
        assert!(cli.is_cli_mode());
        if let Some(Command::Info(cmd)) = cli.command {
            assert_eq!(cmd.id, "550");
        } else {
            panic!("Expected Info command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["cinetui", "--json", "--quiet", "info", "550"]);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_validate_movie_id() {
        assert_eq!(validate_movie_id("550"), Ok(550));
        assert_eq!(validate_movie_id("811941"), Ok(811941));
        assert!(validate_movie_id("0").is_err());
        assert!(validate_movie_id("tt1877830").is_err());
        assert!(validate_movie_id("-5").is_err());
        assert!(validate_movie_id("").is_err());
        assert!(validate_movie_id("12.5").is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
    }
}
