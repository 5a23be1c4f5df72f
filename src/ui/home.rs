//! Landing screen
//!
//! Shows which movie id was requested and how to open it.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::Theme;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" HOME ", Theme::title()));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("cinetui", Theme::title())),
        Line::from(""),
        Line::from(vec![
            Span::styled("movie id: ", Theme::dimmed()),
            Span::styled(app.detail.movie_id.to_string(), Theme::accent()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("press ", Theme::dimmed()),
            Span::styled("Enter", Theme::keybind()),
            Span::styled(" to open the detail view", Theme::dimmed()),
        ]),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(body, area);
}
