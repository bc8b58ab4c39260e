use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::{Status, Task, TaskId};
use crate::tui::app::App;
use crate::util::unicode;

const CREATE_LABEL: &str = "[\u{2795} New]";

fn empty_hint(status: Status) -> &'static str {
    match status {
        Status::Todo => "Drop tasks here...",
        Status::Done => "Completed tasks appear here",
    }
}

fn bubble_label(task: &Task) -> String {
    format!("({})", task.emoji)
}

/// Title line with the create bubble pinned to the right edge
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" TubeTasker", title_style))),
        area,
    );

    let width = unicode::display_width(CREATE_LABEL) as u16;
    if area.width <= width {
        return;
    }
    let button = Rect::new(area.right() - width - 1, area.y, width, 1);
    let style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled(CREATE_LABEL, style)), button);
    app.layout.create_button = Some(button);
}

/// Both containers, their bubbles, the hover preview and the drag ghost
pub fn render_board(frame: &mut Frame, app: &mut App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_container(frame, app, Status::Todo, halves[0]);
    render_container(frame, app, Status::Done, halves[1]);
    render_preview(frame, app, area);
    render_ghost(frame, app);
}

fn render_container(frame: &mut Frame, app: &mut App, status: Status, area: Rect) {
    app.layout.set_container(status, area);

    let bg = app.theme.background;
    let tint = app.theme.status_color(status);
    let emphasised = app.gestures.active_container() == Some(status);
    let border_style = if emphasised {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let tasks = app.board.view().sequence(status);
    let count = tasks.len();
    let title = format!(" {} ({}) ", status.container_label(), count);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, Style::default().fg(tint).bg(bg)))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    let rows = flow_rows(tasks, inner.width);
    if inner.width == 0 || inner.height == 0 {
        frame.render_widget(block, area);
        return;
    }

    if rows.is_empty() {
        frame.render_widget(block, area);
        let hint_style = Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::ITALIC);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", empty_hint(status)), hint_style)),
            inner,
        );
        return;
    }

    // One bubble row per two lines; the blank line between rows is spacing
    let visible = (usize::from(inner.height) + 1) / 2;
    let max_scroll = rows.len().saturating_sub(visible);
    let scroll = (*app.scroll_mut(status)).min(max_scroll);
    *app.scroll_mut(status) = scroll;
    let shown = &rows[scroll..rows.len().min(scroll + visible)];

    let above: usize = rows[..scroll].iter().map(Vec::len).sum();
    let below = count - above - shown.iter().map(Vec::len).sum::<usize>();
    if let Some(marker) = overflow_marker(above, below) {
        block = block.title_bottom(
            Line::from(Span::styled(marker, Style::default().fg(app.theme.dim).bg(bg)))
                .right_aligned(),
        );
    }
    frame.render_widget(block, area);

    let dragged = app.gestures.session().map(|s| s.task);
    let bubble_style = Style::default().fg(tint).bg(bg).add_modifier(Modifier::BOLD);
    let placeholder_style = Style::default().fg(app.theme.dim).bg(bg);

    for (row_idx, row) in shown.iter().enumerate() {
        let y = inner.y + 2 * row_idx as u16;
        let mut x = inner.x + 1;
        for bubble in row {
            let rect = Rect::new(x, y, bubble.width.min(inner.right().saturating_sub(x)), 1);
            x += bubble.width + 2;
            if rect.width == 0 {
                continue;
            }
            if dragged == Some(bubble.id) {
                frame.render_widget(Paragraph::new(Span::styled("( )", placeholder_style)), rect);
            } else {
                frame.render_widget(
                    Paragraph::new(Span::styled(bubble.label.as_str(), bubble_style)),
                    rect,
                );
                app.layout.bubbles.push((rect, bubble.id));
            }
        }
    }
}

struct FlowBubble {
    id: TaskId,
    label: String,
    width: u16,
}

/// Bubbles flow left to right, wrapping when the next one would not fit
fn flow_rows(tasks: &[Task], inner_width: u16) -> Vec<Vec<FlowBubble>> {
    let mut rows: Vec<Vec<FlowBubble>> = Vec::new();
    let mut current: Vec<FlowBubble> = Vec::new();
    let mut used = 1u16;
    for task in tasks {
        let label = bubble_label(task);
        let width = unicode::display_width(&label) as u16;
        if !current.is_empty() && used + width > inner_width {
            rows.push(std::mem::take(&mut current));
            used = 1;
        }
        current.push(FlowBubble {
            id: task.id,
            label,
            width,
        });
        used += width + 2;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Hidden-bubble counts shown on the container's bottom border
fn overflow_marker(above: usize, below: usize) -> Option<String> {
    match (above, below) {
        (0, 0) => None,
        (0, b) => Some(format!(" \u{25BC} {b} more ")),
        (a, 0) => Some(format!(" \u{25B2} {a} above ")),
        (a, b) => Some(format!(" \u{25B2} {a} \u{00B7} \u{25BC} {b} more ")),
    }
}

/// Title tooltip above (or below) the bubble the pointer rests on
fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let Some(id) = app.gestures.preview() else {
        return;
    };
    let (Some(task), Some(bubble)) = (app.board.task(id), app.layout.bubble_area(id)) else {
        return;
    };

    let max = area.width.saturating_sub(2) as usize;
    let text = unicode::truncate_to_width(&format!(" {} ", task.title), max);
    let width = unicode::display_width(&text) as u16;
    if width == 0 {
        return;
    }
    let y = if bubble.y > area.y {
        bubble.y - 1
    } else {
        bubble.y + 1
    };
    let x = bubble.x.min(area.right().saturating_sub(width));
    let tip = Rect::new(x, y, width, 1).intersection(area);

    let style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.popup_bg);
    frame.render_widget(Clear, tip);
    frame.render_widget(Paragraph::new(Span::styled(text, style)), tip);
}

/// The dragged bubble, drawn at the pointer
fn render_ghost(frame: &mut Frame, app: &App) {
    let Some(session) = app.gestures.session() else {
        return;
    };
    let Some(task) = app.board.task(session.task) else {
        return;
    };
    let label = bubble_label(task);
    let width = unicode::display_width(&label) as u16;
    let full = frame.area();
    let x = session.current.x.clamp(0, i32::from(full.right().saturating_sub(width))) as u16;
    let y = session.current.y.clamp(0, i32::from(full.bottom().saturating_sub(1))) as u16;
    let ghost = Rect::new(x, y, width, 1).intersection(full);
    if ghost.is_empty() {
        return;
    }

    let style = Style::default()
        .fg(app.theme.highlight)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Clear, ghost);
    frame.render_widget(Paragraph::new(Span::styled(label, style)), ghost);
}
