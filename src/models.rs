//! Data structures for cinetui
//!
//! `MovieDetail` is the read-only record fetched from TMDB for one screen
//! visit, together with the display formatting derived from it: release
//! line, rating, budget/revenue, genre tokens, production companies, and
//! the poster URL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL for poster images (w500 size token)
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Fallback text for any field with no value
pub const NOT_AVAILABLE: &str = "N/A";

/// Fixed month-name table, indexed by month number 1-12
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Look up a month name by number, validating the 1-12 range first.
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// A movie genre, keyed by its TMDB id (unique within one record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A production company credited on a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub name: String,
}

/// Detailed movie information from TMDB
///
/// Every field that can be null or absent in the API payload is an `Option`;
/// formatting helpers fall back to [`NOT_AVAILABLE`] rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    /// Raw `YYYY-MM-DD` text; may be absent or malformed
    pub release_date: Option<String>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    /// Average vote on a 0-10 scale
    pub vote_average: Option<f32>,
    pub vote_count: Option<u64>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub status: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub genres: Vec<Genre>,
    pub production_companies: Vec<ProductionCompany>,
}

impl MovieDetail {
    /// Nth `-`-separated segment of the release date, if present and nonempty
    fn date_segment(&self, idx: usize) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').nth(idx))
            .filter(|s| !s.is_empty())
    }

    /// Release year ("2020" for "2020-11-05")
    pub fn year(&self) -> Option<&str> {
        self.date_segment(0)
    }

    /// Month name mapped through the fixed table ("November" for "2020-11-05")
    pub fn month_name(&self) -> Option<&'static str> {
        self.date_segment(1)
            .and_then(|m| m.parse::<u32>().ok())
            .and_then(month_name)
    }

    /// Day of month, verbatim with zero padding ("05" for "2020-11-05")
    pub fn day(&self) -> Option<&str> {
        self.date_segment(2)
    }

    /// Formatted release line: "November 05, 2020"
    ///
    /// `None` unless month name, day, and year are all present, so a partial
    /// date falls through to the `N/A` fallback instead of rendering a hole.
    pub fn release_line(&self) -> Option<String> {
        match (self.month_name(), self.day(), self.year()) {
            (Some(month), Some(day), Some(year)) => Some(format!("{} {}, {}", month, day, year)),
            _ => None,
        }
    }

    /// Vote display: "8/10" (missing average treated as 0 before rounding)
    pub fn vote_display(&self) -> String {
        let rounded = self.vote_average.unwrap_or(0.0).round() as i64;
        format!("{}/10", rounded)
    }

    /// Vote count display: "(1234 votes)", absent when the count is null
    pub fn vote_count_display(&self) -> Option<String> {
        self.vote_count.map(|n| format!("({} votes)", n))
    }

    /// Budget display: "$94 million" (missing budget treated as 0)
    pub fn budget_display(&self) -> String {
        format_millions(self.budget.unwrap_or(0))
    }

    /// Revenue display, same compute order as budget: divide, then format
    pub fn revenue_display(&self) -> String {
        format_millions(self.revenue.unwrap_or(0))
    }

    /// Production company names joined with " · ", or "N/A" when empty
    pub fn companies_display(&self) -> String {
        if self.production_companies.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.production_companies
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(" · ")
        }
    }

    /// Full poster URL: fixed base + size token + relative path
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|p| format!("{}{}", POSTER_BASE_URL, p))
    }

    /// Runtime as "2h 56m", or "45m" under an hour
    pub fn runtime_display(&self) -> Option<String> {
        self.runtime.map(|mins| {
            let hours = mins / 60;
            let rem = mins % 60;
            if hours > 0 {
                format!("{}h {}m", hours, rem)
            } else {
                format!("{}m", rem)
            }
        })
    }
}

impl fmt::Display for MovieDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year().unwrap_or(NOT_AVAILABLE);
        write!(f, "{} ({}) - ★ {}", self.title, year, self.vote_display())
    }
}

/// Format a dollar amount as "$<value> million"
///
/// The division happens before display so fractional millions survive:
/// 94_000_000 -> "$94 million", 94_500_000 -> "$94.5 million".
fn format_millions(amount: u64) -> String {
    let millions = amount as f64 / 1_000_000.0;
    format!("${} million", millions)
}
