use crate::app::App;
use crate::app::query::RequestStatus;
use super::loading::render_loading_line;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    if app.searching {
        "(Enter) to search, (Esc) to cancel"
    } else if app.session.selected().is_some() {
        "(Esc/b/x) or click outside to close, (q) quit"
    } else {
        match app.status() {
            RequestStatus::Idle => "(/) search, (q) quit",
            RequestStatus::Loading => "Loading movies... (/) new search, (q) quit",
            RequestStatus::Error => "(/) search again, (q) quit",
            RequestStatus::Success if app.total_pages() > 1 => {
                "(←↓↑→/hjkl) move, (Enter) details, (n/p) page, (g/G) first/last, (/) search, (q) quit"
            }
            RequestStatus::Success => "(←↓↑→/hjkl) move, (Enter) details, (/) search, (q) quit",
        }
    }
}

/// Renders the footer with instructions at the bottom of the screen, or a
/// spinner while the next page loads behind the stale grid
pub fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    if app.queries.is_revalidating() && !app.searching && app.session.selected().is_none() {
        let inner = bottom_block.inner(area);
        frame.render_widget(bottom_block, area);
        render_loading_line(frame, app, inner);
        return;
    }

    let instruction_text = get_instruction_text(app);
    let bottom = Paragraph::new(Text::styled(instruction_text, Style::default()))
        .block(bottom_block);

    frame.render_widget(bottom, area);
}
