//! Toast feature rendering: stacked boxes in the top-right corner.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::state::{ToastKind, ToastStack};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Info => Color::Blue,
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    }
}

/// Renders the toast stack over the rest of the UI. Drawn last.
pub fn render(frame: &mut Frame, area: Rect, toasts: &ToastStack) {
    if toasts.is_empty() {
        return;
    }

    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width + 1);

    let mut y = area.y + 1;
    for toast in toasts.toasts() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let color = kind_color(toast.kind);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        frame.render_widget(block, rect);

        let inner = Rect::new(
            rect.x + 1,
            rect.y + 1,
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(2),
        );
        let lines = vec![
            Line::from(Span::styled(
                toast.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                toast.description.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        y += TOAST_HEIGHT + 1;
    }
}
