use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the generic error view; details go to the log, not the screen
pub fn render_error(frame: &mut Frame, area: Rect) {
    let error_block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let error_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Something went wrong while loading movies.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This might happen if:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "- Network connection issues",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "- The API token was rejected",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "- The movie service is unavailable",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press (/) to try another search",
            Style::default().fg(Color::Gray),
        )),
    ];

    let error_paragraph = Paragraph::new(error_text)
        .block(error_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
