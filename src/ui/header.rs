use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the search input at the top of the screen
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (title, border_style) = if app.searching {
        ("Search movies", Style::default().fg(Color::Yellow))
    } else {
        ("Movies", Style::default())
    };

    let title_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let line = if app.searching {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(app.search_term.as_str()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else if app.session.query().is_empty() {
        Line::from(Span::styled(
            "Press (/) to search for a movie",
            Style::default().fg(Color::Gray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.session.query(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(title_block), area);
}
