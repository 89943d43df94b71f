use crate::app::App;
use crate::app::tmdb::MovieSummary;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const TILE_WIDTH: u16 = 30;
pub const TILE_HEIGHT: u16 = 5;

/// How many tiles fit side by side in `width` columns.
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / TILE_WIDTH).max(1))
}

/// First grid row to draw so that `cursor_row` stays on screen.
fn first_visible_row(cursor_row: usize, visible_rows: usize) -> usize {
    (cursor_row + 1).saturating_sub(visible_rows)
}

/// Renders the result grid or the empty state
pub fn render_main_content(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.results().is_empty() {
        let empty_block = Block::default()
            .title("No movies to show - press (/) to search again")
            .borders(Borders::ALL)
            .style(Style::default());

        frame.render_widget(empty_block, area);
        return;
    }

    let title = format!(
        "Results for \"{}\" ({} on this page)",
        app.session.query(),
        app.results().len()
    );
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = grid_columns(inner.width);
    app.grid_columns = columns;

    let visible_rows = usize::from((inner.height / TILE_HEIGHT).max(1));
    let first_row = first_visible_row(app.grid_cursor / columns, visible_rows);
    let tile_width = inner.width / columns as u16;
    let cursor = app.grid_cursor;

    let mut hitboxes = Vec::new();
    for (index, movie) in app
        .results()
        .iter()
        .enumerate()
        .skip(first_row * columns)
        .take(visible_rows * columns)
    {
        let offset = index - first_row * columns;
        let row = (offset / columns) as u16;
        let column = (offset % columns) as u16;

        let tile = Rect::new(
            inner.x + column * tile_width,
            inner.y + row * TILE_HEIGHT,
            tile_width,
            TILE_HEIGHT,
        )
        .intersection(inner);

        render_tile(frame, movie, index == cursor, tile);
        hitboxes.push((index, tile));
    }

    app.tile_hitboxes = hitboxes;
}

fn render_tile(frame: &mut Frame, movie: &MovieSummary, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let title_style = if selected {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let marker = if selected { "▶ " } else { "" };

    let mut meta = vec![Span::styled(
        movie.year().unwrap_or("----").to_string(),
        Style::default().fg(Color::Cyan),
    )];
    if movie.vote_count > 0 {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(
            format!("★ {:.1}", movie.vote_average),
            Style::default().fg(rating_color(movie.vote_average)),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(format!("{marker}{}", movie.title), title_style)),
        Line::from(meta),
        Line::from(Span::styled(
            movie.overview.clone().unwrap_or_default(),
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Helper function to get color based on the 0-10 vote average
pub fn rating_color(score: f64) -> Color {
    if score >= 7.0 {
        Color::Green
    } else if score >= 5.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_terminal_width() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(TILE_WIDTH * 2 + 5), 2);
        assert_eq!(grid_columns(200), 6);
    }

    #[test]
    fn scrolls_just_enough_to_show_the_cursor() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(3, 3), 1);
        assert_eq!(first_visible_row(6, 3), 4);
    }
}
