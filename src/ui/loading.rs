use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, WhichUse};

pub fn throbber(label: &str) -> Throbber<'_> {
    Throbber::default()
        .label(label)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_style(Style::default().fg(Color::Cyan))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin)
}

/// Renders the full loading screen shown before any results exist
pub fn render_loading(frame: &mut Frame, app: &mut App, area: Rect) {
    let loading_block = Block::default()
        .title("Loading Movies")
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = loading_block.inner(area);
    frame.render_widget(loading_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let label = format!("Loading movies for \"{}\"...", app.session.query());
    frame.render_stateful_widget(throbber(&label), rows[1], &mut app.throbber_state);
}

/// One-line spinner shown while the next page loads behind the stale grid
pub fn render_loading_line(frame: &mut Frame, app: &mut App, area: Rect) {
    let label = format!("Loading page {}...", app.session.page());
    frame.render_stateful_widget(throbber(&label), area, &mut app.throbber_state);
}
