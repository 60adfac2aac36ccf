//! Form feature rendering: the centered sign-in card.

use parlor_core::auth::Field;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{FieldInput, FormState};

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 14;

/// Spinner frames for the pending sign-in indicator.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Renders the sign-in card centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, form: &FormState, spinner_frame: usize) {
    let card = centered_area(area, CARD_WIDTH, CARD_HEIGHT);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Parlor ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Sign in to your account",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, row(inner, 0));

    render_field(
        frame,
        inner,
        2,
        "E-mail",
        &form.email,
        form.focus == Field::Email,
        form.error_for(Field::Email),
        false,
    );
    render_field(
        frame,
        inner,
        5,
        "Password",
        &form.password,
        form.focus == Field::Password,
        form.error_for(Field::Password),
        true,
    );

    // Status line: spinner while submitting, hints otherwise
    let status = if form.submitting {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        Line::from(Span::styled(
            format!("{spinner} Signing in..."),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::styled(" switch • ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" sign in • ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        row(inner, 9),
    );
}

#[allow(clippy::too_many_arguments)]
fn render_field(
    frame: &mut Frame,
    inner: Rect,
    y: u16,
    label: &str,
    input: &FieldInput,
    focused: bool,
    error: Option<&str>,
    masked: bool,
) {
    let label_color = if focused { Color::Yellow } else { Color::Gray };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(label_color),
        ))),
        row(inner, y),
    );

    let display: String = if masked {
        "•".repeat(input.value().chars().count())
    } else {
        input.value().to_string()
    };
    render_input_line(frame, row(inner, y + 1), &display, input.cursor(), focused);

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red),
            ))),
            row(inner, y + 2),
        );
    }
}

/// Renders a prompt-style input line: "> <text>█".
fn render_input_line(frame: &mut Frame, area: Rect, text: &str, cursor: usize, focused: bool) {
    let max_width = area.width.saturating_sub(3) as usize;
    let visible = truncate_to_width(text, max_width);

    let text_color = if focused { Color::White } else { Color::Gray };
    let mut spans = vec![Span::styled("> ", Style::default().fg(Color::DarkGray))];

    if focused {
        // Split at the cursor so the block cursor sits inside the text.
        let cursor = cursor.min(visible.chars().count());
        let byte = visible
            .char_indices()
            .nth(cursor)
            .map_or(visible.len(), |(i, _)| i);
        let (before, after) = visible.split_at(byte);
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(text_color),
        ));
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(text_color),
        ));
    } else {
        spans.push(Span::styled(
            visible.to_string(),
            Style::default().fg(text_color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Keeps the tail of `text` that fits in `max_width` display columns.
fn truncate_to_width(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut start = 0;
    for (i, _) in text.char_indices() {
        if text[i..].width() <= max_width {
            start = i;
            break;
        }
        start = i;
    }
    &text[start..]
}

fn row(inner: Rect, y: u16) -> Rect {
    Rect::new(inner.x, inner.y + y, inner.width, 1)
}

/// Centers a `width`x`height` rectangle within `area`, clamped to fit.
fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
