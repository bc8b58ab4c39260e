use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::spans_width;

fn mode_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Board => "n new  drag move  click details  hold pop  ? help  q quit",
        Mode::Details => "e edit  space toggle  d pop  Esc close",
        Mode::Form => "Tab next field  Enter save  Alt-Enter newline  Esc cancel",
        Mode::Confirm => "y pop  n keep",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = match &app.status_message {
        Some(message) => vec![Span::styled(
            format!(" {message}"),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )],
        None => vec![Span::styled(
            format!(" {}", mode_hint(app.mode)),
            Style::default().fg(app.theme.dim).bg(bg),
        )],
    };

    let view = app.board.view();
    let counts = format!(
        "{} waiting \u{00B7} {} done ",
        view.todo.len(),
        view.done.len()
    );
    let content_width = spans_width(&spans);
    let counts_width = unicode::display_width(&counts);
    if content_width + counts_width < width {
        let padding = width - content_width - counts_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
