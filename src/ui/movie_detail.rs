use crate::app::App;
use crate::app::tmdb::MovieSummary;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

use super::loading::throbber;
use super::main_content::rating_color;

/// Centered rect covering 80% of `area`, the modal's footprint.
pub fn modal_rect(area: Rect) -> Rect {
    let width = area.width * 4 / 5;
    let height = area.height * 4 / 5;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Renders the detail modal for the selected movie over `area`
pub fn render_movie_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(movie) = app.session.selected().cloned() else {
        return;
    };

    let modal = modal_rect(area);
    app.modal_area = Some(modal);
    frame.render_widget(Clear, modal);

    let outer_block = Block::default()
        .title(format!("Movie Details - {}", movie.title))
        .title_bottom(Line::from(" (Esc) close ").alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner_area = outer_block.inner(modal);
    frame.render_widget(outer_block, modal);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Poster
            Constraint::Min(20),        // Details
        ])
        .split(inner_area);

    render_poster_section(frame, columns[0], app);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title info
            Constraint::Min(3),    // Content
        ])
        .split(columns[1]);

    render_title_section(frame, rows[0], &movie);
    render_content_section(frame, rows[1], &movie);
}

/// Renders the poster section
fn render_poster_section(frame: &mut Frame, area: Rect, app: &mut App) {
    let poster_block = Block::default().borders(Borders::ALL).title("Poster");

    if app.poster.as_ref().is_some_and(|poster| poster.loading) {
        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
            .split(inner_area);
        frame.render_stateful_widget(
            throbber("Downloading poster..."),
            rows[1],
            &mut app.throbber_state,
        );
        return;
    }

    match app.poster.as_mut() {
        Some(poster) if poster.protocol.is_some() => {
            let inner_area = poster_block.inner(area);
            frame.render_widget(poster_block, area);

            if let Some(protocol) = poster.protocol.as_mut() {
                let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));
                frame.render_stateful_widget(image, inner_area, protocol);
            }
        }
        _ => {
            let placeholder_text = vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled(
                    "No poster available",
                    Style::default().fg(Color::Gray),
                )),
            ];

            let placeholder_paragraph = Paragraph::new(placeholder_text)
                .alignment(Alignment::Center)
                .block(poster_block);

            frame.render_widget(placeholder_paragraph, area);
        }
    }
}

/// Renders the title section with basic info
fn render_title_section(frame: &mut Frame, area: Rect, movie: &MovieSummary) {
    let mut heading = vec![Span::styled(
        &movie.title,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(year) = movie.year() {
        heading.push(Span::raw(" "));
        heading.push(Span::styled(format!("({year})"), Style::default().fg(Color::Cyan)));
    }

    let title_info = vec![
        Line::from(heading),
        Line::from(vec![
            Span::styled("Release date: ", Style::default().fg(Color::Gray)),
            Span::styled(
                movie.release_date.as_deref().filter(|d| !d.is_empty()).unwrap_or("unknown"),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Rating: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}/10", movie.vote_average),
                Style::default()
                    .fg(rating_color(movie.vote_average))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({} votes)", movie.vote_count), Style::default().fg(Color::Gray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(title_info), area);
}

/// Renders the main content section
fn render_content_section(frame: &mut Frame, area: Rect, movie: &MovieSummary) {
    let mut content = vec![];

    content.push(Line::from(Span::styled(
        "Overview:",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    content.push(Line::from(Span::styled(
        movie
            .overview
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or("No overview available."),
        Style::default().fg(Color::White),
    )));
    content.push(Line::from(""));

    if let Some(original) = movie.original_title.as_deref().filter(|t| *t != movie.title) {
        content.push(Line::from(vec![
            Span::styled("Original title: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(original, Style::default().fg(Color::White)),
        ]));
    }

    if let Some(language) = movie.original_language.as_deref() {
        content.push(Line::from(vec![
            Span::styled("Language: ", Style::default().fg(Color::Gray)),
            Span::styled(language, Style::default().fg(Color::White)),
        ]));
    }

    content.push(Line::from(vec![
        Span::styled("Popularity: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.1}", movie.popularity), Style::default().fg(Color::White)),
    ]));

    let content_paragraph = Paragraph::new(content).wrap(Wrap { trim: true });

    frame.render_widget(content_paragraph, area);
}
