use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Page numbers shown around the active page.
pub const PAGE_RANGE: u32 = 5;
/// Page numbers always shown at each end.
pub const MARGIN_PAGES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Previous,
    Page(u32),
    Break,
    Next,
}

/// Builds the selector for `total` pages around the 0-based `selected` index.
pub fn page_items(total: u32, selected: u32) -> Vec<PageItem> {
    let mut items = vec![PageItem::Previous];

    if total <= PAGE_RANGE {
        items.extend((1..=total).map(PageItem::Page));
    } else {
        let mut start = selected.saturating_sub(PAGE_RANGE / 2);
        let mut end = start + PAGE_RANGE - 1;
        if end >= total {
            end = total - 1;
            start = end + 1 - PAGE_RANGE;
        }

        for index in 0..total {
            let in_margin = index < MARGIN_PAGES || index >= total - MARGIN_PAGES;
            if in_margin || (start..=end).contains(&index) {
                items.push(PageItem::Page(index + 1));
            } else if items.last() != Some(&PageItem::Break) {
                items.push(PageItem::Break);
            }
        }
    }

    items.push(PageItem::Next);
    items
}

/// Renders the page selector between the search input and the grid
pub fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.total_pages();
    let selected = app.session.page().saturating_sub(1);

    let idle = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let active = Style::default()
        .bg(Color::Yellow)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for item in page_items(total, selected) {
        let span = match item {
            PageItem::Previous if selected == 0 => Span::styled(" ← ", disabled),
            PageItem::Previous => Span::styled(" ← ", idle),
            PageItem::Next if selected + 1 >= total => Span::styled(" → ", disabled),
            PageItem::Next => Span::styled(" → ", idle),
            PageItem::Break => Span::styled(" … ", disabled),
            PageItem::Page(page) if page - 1 == selected => Span::styled(format!(" {page} "), active),
            PageItem::Page(page) => Span::styled(format!(" {page} "), idle),
        };
        spans.push(span);
    }

    let block = Block::default()
        .title(format!("Page {} of {}", selected + 1, total))
        .borders(Borders::ALL);

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageItem::{Break, Next, Page, Previous};

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(
            page_items(3, 1),
            vec![Previous, Page(1), Page(2), Page(3), Next]
        );
    }

    #[test]
    fn window_at_the_start() {
        assert_eq!(
            page_items(20, 0),
            vec![Previous, Page(1), Page(2), Page(3), Page(4), Page(5), Break, Page(20), Next]
        );
    }

    #[test]
    fn window_in_the_middle_has_two_breaks() {
        assert_eq!(
            page_items(20, 9),
            vec![
                Previous,
                Page(1),
                Break,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Break,
                Page(20),
                Next
            ]
        );
    }

    #[test]
    fn window_at_the_end() {
        assert_eq!(
            page_items(20, 19),
            vec![Previous, Page(1), Break, Page(16), Page(17), Page(18), Page(19), Page(20), Next]
        );
    }

    #[test]
    fn margin_page_merges_into_window() {
        assert_eq!(
            page_items(20, 3),
            vec![
                Previous,
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Break,
                Page(20),
                Next
            ]
        );
    }
}
