use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Mode};

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    // Context-sensitive help
    match app.mode {
        Mode::Board | Mode::Confirm => {
            lines.push(Line::from(Span::styled(" Mouse", header_style)));
            add_binding(&mut lines, " Click", "Show details", key_style, desc_style);
            add_binding(&mut lines, " Double-click", "Edit task", key_style, desc_style);
            add_binding(&mut lines, " Hold", "Pop (delete) task", key_style, desc_style);
            add_binding(
                &mut lines,
                " Drag",
                "Move between containers",
                key_style,
                desc_style,
            );
            add_binding(&mut lines, " Rest", "Preview title", key_style, desc_style);
            add_binding(&mut lines, " Wheel", "Scroll container", key_style, desc_style);
            lines.push(Line::from(""));

            lines.push(Line::from(Span::styled(" Keys", header_style)));
            add_binding(&mut lines, " n", "New task", key_style, desc_style);
            add_binding(
                &mut lines,
                " [Shift+]\u{2191}/\u{2193}",
                "Scroll waiting [completed]",
                key_style,
                desc_style,
            );
            add_binding(&mut lines, " Esc", "Cancel drag", key_style, desc_style);
        }
        Mode::Details => {
            lines.push(Line::from(Span::styled(" Details", header_style)));
            add_binding(&mut lines, " e", "Edit task", key_style, desc_style);
            add_binding(&mut lines, " space", "Toggle status", key_style, desc_style);
            add_binding(&mut lines, " d", "Pop (delete) task", key_style, desc_style);
            add_binding(&mut lines, " Esc", "Close", key_style, desc_style);
        }
        Mode::Form => {
            lines.push(Line::from(Span::styled(" Form", header_style)));
            add_binding(&mut lines, " Tab", "Next field", key_style, desc_style);
            add_binding(&mut lines, " \u{2190}/\u{2192}", "Pick emoji", key_style, desc_style);
            add_binding(&mut lines, " Ctrl+B", "Insert bold", key_style, desc_style);
            add_binding(&mut lines, " Ctrl+S", "Insert strikethrough", key_style, desc_style);
            add_binding(&mut lines, " Ctrl+L", "Insert list item", key_style, desc_style);
            add_binding(&mut lines, " Alt+Enter", "Newline", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Save", key_style, desc_style);
            add_binding(&mut lines, " Esc", "Cancel", key_style, desc_style);
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+C", "Quit (anywhere)", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Bubbles ", header_style))
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
