use chrono::{Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Status;
use crate::tui::app::{App, PopupButton};

use super::helpers::{ButtonRow, centered_rect_fixed};
use super::markup::render_markup;

const POPUP_W: u16 = 56;
const NO_DETAILS: &str = "No details provided...";

fn created_label(created_at: i64) -> String {
    match Local.timestamp_millis_opt(created_at).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "unknown".to_string(),
    }
}

/// Render the details popup for `app.details`
pub fn render_details_popup(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(id) = app.details else {
        return;
    };
    let Some(task) = app.board.task(id) else {
        return;
    };

    let bg = app.theme.popup_bg;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {} {}", task.emoji, task.title),
        title_style,
    )));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} \u{00B7} ", task.id), dim_style),
        Span::styled(
            task.status.container_label(),
            Style::default().fg(app.theme.status_color(task.status)).bg(bg),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!(" Created {}", created_label(task.created_at)),
        dim_style,
    )));
    lines.push(Line::from(""));

    // Leave room for the header lines, the button row and the borders
    let max_body = area.height.saturating_sub(8).max(1) as usize;
    if task.description.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {NO_DETAILS}"),
            dim_style.add_modifier(Modifier::ITALIC),
        )));
    } else {
        for mut line in render_markup(&task.description, text_style)
            .into_iter()
            .take(max_body)
        {
            line.spans.insert(0, Span::styled(" ", text_style));
            lines.push(line);
        }
    }
    lines.push(Line::from(""));

    let toggle_label = match task.status {
        Status::Todo => "space Complete",
        Status::Done => "space Reopen",
    };
    let buttons = ButtonRow::new(text_style)
        .button("e Edit", PopupButton::EditTask(id), key_style, text_style)
        .button(toggle_label, PopupButton::ToggleTask(id), key_style, text_style)
        .button("d Pop", PopupButton::DeleteTask(id), key_style, text_style)
        .button("Esc Close", PopupButton::CloseDetails, dim_style, text_style);
    let button_row = lines.len() as u16;
    lines.push(buttons.line());

    let popup = centered_rect_fixed(POPUP_W, lines.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    app.layout.popup = Some(popup);
    buttons.place(&mut app.layout, inner, inner.y + button_row);
}
