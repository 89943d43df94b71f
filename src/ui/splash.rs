use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_big_text::{BigText, PixelSize};

/// Renders the banner shown before the first search
pub fn render_splash(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).style(Style::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4), // Big text
            Constraint::Min(2),    // Hint
        ])
        .split(inner);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .lines(vec!["MOVIES".into()])
        .alignment(Alignment::Center)
        .build();

    frame.render_widget(big_text, chunks[1]);

    let hint = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Type a title and press Enter to search The Movie Database",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Press (/) to start typing",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center),
        chunks[2],
    );
}
