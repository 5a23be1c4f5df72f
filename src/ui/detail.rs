//! Detail view for one movie
//!
//! Renders each fetch phase distinctly: a spinner line while loading, a
//! dedicated not-found screen, a network error screen, and the full record
//! once loaded. Loaded content scrolls vertically.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::DetailState;
use crate::fetch::{FetchError, FetchState};
use crate::models::{MovieDetail, NOT_AVAILABLE};
use crate::ui::{field_line, Theme};

/// Render the detail screen for whatever phase the fetch is in
pub fn draw(frame: &mut Frame, area: Rect, state: &DetailState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" DETAIL ", Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.fetch {
        FetchState::Idle | FetchState::Loading => draw_loading(frame, inner),
        FetchState::Failed(FetchError::NotFound) => draw_not_found(frame, inner, state.movie_id),
        FetchState::Failed(FetchError::Network(msg)) => draw_error(frame, inner, msg),
        FetchState::Loaded(movie) => draw_movie(frame, inner, movie, state.scroll),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let msg = Paragraph::new("Loading...")
        .style(Theme::loading())
        .alignment(Alignment::Center);
    frame.render_widget(msg, centered_line(area));
}

fn draw_not_found(frame: &mut Frame, area: Rect, movie_id: u64) {
    let lines = vec![
        Line::from(Span::styled("Movie not found", Theme::warning())),
        Line::from(""),
        Line::from(Span::styled(
            format!("No record for id {}", movie_id),
            Theme::dimmed(),
        )),
    ];
    let msg = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(msg, centered_line(area));
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled("Fetch failed", Theme::error())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Theme::dimmed())),
        Line::from(""),
        Line::from(Span::styled("press r to retry", Theme::keybind_desc())),
    ];
    let msg = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(msg, centered_line(area));
}

fn draw_movie(frame: &mut Frame, area: Rect, movie: &MovieDetail, scroll: u16) {
    let mut lines = Vec::new();

    // Title line with year
    let year = movie
        .year()
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();
    lines.push(Line::from(vec![
        Span::styled("▶ ", Theme::accent()),
        Span::styled(movie.title.clone(), Theme::title()),
        Span::styled(year, Theme::year()),
    ]));

    if let Some(tagline) = &movie.tagline {
        lines.push(Line::from(Span::styled(tagline.clone(), Theme::dimmed())));
    }
    lines.push(Line::from(""));

    // Rating and runtime on one line
    let mut meta = vec![Span::styled(
        format!("★ {}", movie.vote_display()),
        Theme::rating(),
    )];
    if let Some(votes) = movie.vote_count_display() {
        meta.push(Span::styled(format!(" {}", votes), Theme::dimmed()));
    }
    if let Some(runtime) = movie.runtime_display() {
        meta.push(Span::styled(" │ ", Theme::dimmed()));
        meta.push(Span::styled(runtime, Theme::secondary()));
    }
    if let Some(status) = &movie.status {
        meta.push(Span::styled(" │ ", Theme::dimmed()));
        meta.push(Span::styled(status.clone(), Theme::text()));
    }
    lines.push(Line::from(meta));
    lines.push(Line::from(""));

    lines.push(field_line(
        "Released",
        movie
            .release_line()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        Theme::text(),
    ));
    lines.push(field_line("Budget", movie.budget_display(), Theme::text()));
    lines.push(field_line("Revenue", movie.revenue_display(), Theme::text()));
    lines.push(field_line("Studios", movie.companies_display(), Theme::text()));
    lines.push(Line::from(""));

    // Genre tokens as a row of badges
    if !movie.genres.is_empty() {
        let mut spans = vec![Span::styled(format!("{:<12}", "Genres"), Theme::dimmed())];
        for genre in &movie.genres {
            spans.push(Span::styled(format!(" {} ", genre.name), Theme::genre()));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(url) = movie.poster_url() {
        lines.push(field_line("Poster", url, Theme::dimmed()));
        lines.push(Line::from(""));
    }

    // Overview
    if let Some(overview) = &movie.overview {
        lines.push(Line::from(Span::styled("OVERVIEW", Theme::accent())));
        lines.push(Line::from(""));
        for line in overview.lines() {
            lines.push(Line::from(Span::styled(line.to_string(), Theme::text())));
        }
    }

    // Clamp so scrolling stops at the last line instead of a blank screen
    let max_scroll = (lines.len() as u16).saturating_sub(1);
    let scroll = scroll.min(max_scroll);

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// A one-third-height band vertically centered in `area`
fn centered_line(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Min(3),
            Constraint::Percentage(33),
        ])
        .split(area);
    chunks[1]
}
