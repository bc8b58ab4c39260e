use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::EMOJI_PALETTE;
use crate::tui::app::{App, PopupButton};
use crate::tui::form::{FormField, FormMode, TaskForm, TextField};
use crate::util::unicode;

use super::helpers::{ButtonRow, centered_rect_fixed};

const POPUP_W: u16 = 60;
const PALETTE_COLS: usize = 8;
const CELL_W: u16 = 4;
/// Visible description rows
const DESC_ROWS: usize = 5;
/// Indent of field text inside the popup
const FIELD_INDENT: u16 = 3;

const ROW_EMOJI: u16 = 2;
const ROW_PALETTE: u16 = 3;
const ROW_TITLE_LABEL: u16 = ROW_PALETTE + 4;
const ROW_TITLE: u16 = ROW_TITLE_LABEL + 1;
const ROW_DESC_LABEL: u16 = ROW_TITLE + 2;
const ROW_DESC: u16 = ROW_DESC_LABEL + 1;

/// First visible description line, keeping the cursor line in view
fn desc_scroll(field: &TextField) -> usize {
    let (line, _) = field.cursor_line_col();
    line.saturating_sub(DESC_ROWS - 1)
}

/// Render the create/edit form popup
pub fn render_task_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(form) = app.form.as_ref() else {
        return;
    };

    let bg = app.theme.popup_bg;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let label_style = |field: FormField| {
        if form.focus == field {
            header_style
        } else {
            dim_style
        }
    };

    let header = match form.mode {
        FormMode::Create => " New task".to_string(),
        FormMode::Edit(id) => format!(" Edit {id}"),
    };

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(header, header_style)), Line::from("")];
    lines.push(Line::from(vec![
        Span::styled(" Emoji  ", label_style(FormField::Emoji)),
        Span::styled(form.emoji.clone(), text_style),
        Span::styled("   \u{2190}/\u{2192} to pick", dim_style),
    ]));

    let selected = form.palette_index();
    for (r, emojis) in EMOJI_PALETTE.chunks(PALETTE_COLS).enumerate() {
        let mut spans = vec![Span::styled(" ", text_style)];
        for (c, emoji) in emojis.iter().enumerate() {
            let idx = r * PALETTE_COLS + c;
            let style = if selected == Some(idx) {
                text_style.add_modifier(Modifier::REVERSED)
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {emoji} "), style));
        }
        lines.push(Line::from(spans));
    }
    while lines.len() < ROW_TITLE_LABEL as usize {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(" Title", label_style(FormField::Title))));
    lines.push(Line::from(vec![
        Span::styled("   ", text_style),
        Span::styled(form.title.text.clone(), text_style),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(" Description", label_style(FormField::Description)),
        Span::styled("   ^B bold  ^S strike  ^L list", dim_style),
    ]));
    let first = desc_scroll(&form.description);
    let desc_lines: Vec<&str> = form.description.text.split('\n').collect();
    for i in 0..DESC_ROWS {
        let text = desc_lines.get(first + i).copied().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled("   ", text_style),
            Span::styled(text.to_string(), text_style),
        ]));
    }
    lines.push(Line::from(""));

    let buttons = ButtonRow::new(text_style)
        .button("Enter Save", PopupButton::SaveForm, header_style, text_style)
        .button("Esc Cancel", PopupButton::CancelForm, dim_style, text_style);
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

    if let Some((x, y)) = cursor_position(form, inner) {
        frame.set_cursor_position((x, y));
    }

    app.layout.popup = Some(popup);
    record_regions(app, inner);
    buttons.place(&mut app.layout, inner, inner.y + button_row);
}

/// Screen cell of the text cursor in the focused field
fn cursor_position(form: &TaskForm, inner: Rect) -> Option<(u16, u16)> {
    let (row, col) = match form.focus {
        FormField::Emoji => return None,
        FormField::Title => {
            let col = unicode::byte_offset_to_display_col(&form.title.text, form.title.cursor);
            (ROW_TITLE, col)
        }
        FormField::Description => {
            let field = &form.description;
            let (line, byte_col) = field.cursor_line_col();
            let text = field.text.split('\n').nth(line).unwrap_or("");
            let col = unicode::byte_offset_to_display_col(text, byte_col);
            (ROW_DESC + (line - desc_scroll(field)) as u16, col)
        }
    };
    let x = inner.x + FIELD_INDENT + col as u16;
    let y = inner.y + row;
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }
    Some((x, y))
}

/// Palette cells and field rows are clickable
fn record_regions(app: &mut App, inner: Rect) {
    let row_rect = |row: u16, height: u16| Rect::new(inner.x, inner.y + row, inner.width, height);
    let regions = [
        (row_rect(ROW_EMOJI, 1), PopupButton::FocusField(FormField::Emoji)),
        (row_rect(ROW_TITLE_LABEL, 2), PopupButton::FocusField(FormField::Title)),
        (
            row_rect(ROW_DESC_LABEL, DESC_ROWS as u16 + 1),
            PopupButton::FocusField(FormField::Description),
        ),
    ];
    for (rect, button) in regions {
        let rect = rect.intersection(inner);
        if !rect.is_empty() {
            app.layout.buttons.push((rect, button));
        }
    }

    for idx in 0..EMOJI_PALETTE.len() {
        let row = (idx / PALETTE_COLS) as u16;
        let col = (idx % PALETTE_COLS) as u16;
        let cell = Rect::new(
            inner.x + 1 + col * CELL_W,
            inner.y + ROW_PALETTE + row,
            CELL_W,
            1,
        )
        .intersection(inner);
        if !cell.is_empty() {
            app.layout.buttons.push((cell, PopupButton::PickEmoji(idx)));
        }
    }
}
