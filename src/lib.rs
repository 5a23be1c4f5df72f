//! cinetui - terminal viewer for TMDB movie details
//!
//! Fetches one movie record from TMDB and shows it in a scrollable
//! terminal screen, or prints it for scripting.
//!
//! # Modules
//!
//! - `models` - Movie detail record and display formatting
//! - `api` - TMDB client
//! - `fetch` - Async fetch state machine
//! - `app` - Application state and navigation
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable command mode
//! - `config` - Config file and API key resolution

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fetch;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::{TmdbClient, TmdbError};
pub use app::{App, AppState};
pub use fetch::{FetchError, FetchState, Fetcher};
pub use models::{Genre, MovieDetail, ProductionCompany};
