//! Terminal UI components
//!
//! Built with ratatui in a warm marquee-and-velvet palette.
//! Keyboard-first navigation throughout.

pub mod detail;
pub mod home;
pub mod theme;

pub use theme::Theme;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, AppState};

/// Draw the whole interface: header, active screen, status bar
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    match app.state {
        AppState::Home => home::draw(frame, chunks[1], app),
        AppState::Detail => detail::draw(frame, chunks[1], &app.detail),
    }

    draw_status_bar(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.detail.fetch.data() {
        Some(movie) => format!(" cinetui · {} ", movie.title),
        None => format!(" cinetui · movie #{} ", app.detail.movie_id),
    };
    let block = ratatui::widgets::Block::default()
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()));
    frame.render_widget(block, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.state {
        AppState::Home => &[("Enter", "open"), ("q", "quit")],
        AppState::Detail => &[
            ("↑/↓", "scroll"),
            ("r", "reload"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, desc) in hints {
        spans.push(Span::styled(format!(" {} ", key), Theme::keybind()));
        spans.push(Span::styled(format!("{} ", desc), Theme::keybind_desc()));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Theme::status_bar());
    frame.render_widget(bar, area);
}

/// Label + value line used by the detail and home screens
pub(crate) fn field_line(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Theme::dimmed()),
        Span::styled(value, value_style),
    ])
}
