//! CLI Command Handlers
//!
//! Implements the `info` command by calling the TMDB client directly.
//! Each handler takes CLI args and Output, returns ExitCode.

use std::path::Path;

use crate::api::{TmdbClient, TmdbError};
use crate::cli::{validate_movie_id, ExitCode, InfoCmd, JsonOutput, Output};
use crate::config::Config;
use crate::models::{MovieDetail, NOT_AVAILABLE};

/// Load config from an explicit path if given, else the default location
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(p) => Config::load_from(p),
        None => Ok(Config::load()),
    }
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, config_path: Option<&Path>, output: &Output) -> ExitCode {
    let movie_id = match validate_movie_id(&cmd.id) {
        Ok(id) => id,
        Err(msg) => return output.error(msg, ExitCode::InvalidArgs),
    };

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => return output.error(format!("Failed to read config: {}", e), ExitCode::Error),
    };
    let api_key = match config.tmdb_api_key() {
        Ok(key) => key,
        Err(e) => return output.error(e.to_string(), ExitCode::Error),
    };
    let client = TmdbClient::new(api_key);

    output.info(format!("Fetching movie {}...", movie_id));

    match client.movie_detail(movie_id).await {
        Ok(detail) => {
            if output.json {
                let wrapped = JsonOutput::success(&detail);
                if let Err(e) = output.print_json(&wrapped) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                print_detail(&detail);
            }
            ExitCode::Success
        }
        Err(e) => match e.downcast_ref::<TmdbError>() {
            Some(TmdbError::NotFound) => {
                output.error(format!("No movie with id {}", movie_id), ExitCode::NotFound)
            }
            _ => output.error(format!("Fetch failed: {}", e), ExitCode::NetworkError),
        },
    }
}

/// Plain-text rendering for terminal use
fn print_detail(movie: &MovieDetail) {
    let year = movie
        .year()
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();
    println!("{}{}", movie.title, year);

    if let Some(tagline) = &movie.tagline {
        println!("{}", tagline);
    }
    println!();

    println!(
        "  Rating:   {} {}",
        movie.vote_display(),
        movie.vote_count_display().unwrap_or_default()
    );
    println!(
        "  Released: {}",
        movie
            .release_line()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    );
    if let Some(runtime) = movie.runtime_display() {
        println!("  Runtime:  {}", runtime);
    }
    println!("  Budget:   {}", movie.budget_display());
    println!("  Revenue:  {}", movie.revenue_display());
    println!("  Studios:  {}", movie.companies_display());

    if !movie.genres.is_empty() {
        let names: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
        println!("  Genres:   {}", names.join(", "));
    }
    if let Some(url) = movie.poster_url() {
        println!("  Poster:   {}", url);
    }

    if let Some(overview) = &movie.overview {
        println!();
        println!("{}", overview);
    }
}
