//! Signed-in confirmation view.

use parlor_core::auth::Session;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 9;

/// Renders the post-sign-in confirmation card centered in `area`.
pub fn render_signed_in(frame: &mut Frame, area: Rect, session: &Session) {
    let card = centered_area(area, CARD_WIDTH, CARD_HEIGHT);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Parlor ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    let lines = [
        Line::from(Span::styled(
            "Signed in",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            session.user.name.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            session.user.email.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    for (y, line) in lines.into_iter().enumerate() {
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            row(inner, y as u16),
        );
    }
}

fn row(inner: Rect, y: u16) -> Rect {
    Rect::new(inner.x, inner.y + y, inner.width, 1)
}

fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
