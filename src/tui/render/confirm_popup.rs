use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::board::DELETE_PROMPT;
use crate::tui::app::{App, ConfirmAction, PopupButton};

use super::helpers::{ButtonRow, centered_rect_fixed};

const POPUP_W: u16 = 40;

/// Render the yes/no popup for `app.confirm`
pub fn render_confirm_popup(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ConfirmAction::DeleteTask { task_id }) = app.confirm else {
        return;
    };
    let Some(task) = app.board.task(task_id) else {
        return;
    };

    let bg = app.theme.popup_bg;
    let warn_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let buttons = ButtonRow::new(text_style)
        .button("y Pop", PopupButton::ConfirmYes, warn_style, text_style)
        .button("n Keep", PopupButton::ConfirmNo, dim_style, text_style);

    let lines = vec![
        Line::from(Span::styled(format!(" {DELETE_PROMPT}"), warn_style)),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} {}", task.emoji, task.title),
            bright_style,
        )),
        Line::from(""),
        buttons.line(),
    ];
    let button_row = lines.len() as u16 - 1;

    let popup = centered_rect_fixed(POPUP_W, lines.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    app.layout.popup = Some(popup);
    buttons.place(&mut app.layout, inner, inner.y + button_row);
}
