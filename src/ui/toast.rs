use crate::app::App;
use crate::app::toast::ToastKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

const TOAST_HEIGHT: u16 = 3;

/// Stacks visible toasts top-center over `area`
pub fn render_toasts(frame: &mut Frame, app: &App, area: Rect) {
    let mut y = area.y;

    for toast in app.toasts.visible() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }

        let (icon, color) = match toast.kind {
            ToastKind::Error => ("✖", Color::Red),
            ToastKind::Info => ("ℹ", Color::Cyan),
        };
        let text = format!("{icon} {}", toast.message);
        let width = (text.chars().count() as u16 + 4).min(area.width);
        let x = area.x + (area.width - width) / 2;
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(text)).style(Style::default().fg(color)).block(block),
            rect,
        );

        y += TOAST_HEIGHT;
    }
}
