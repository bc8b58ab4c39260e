pub mod board_view;
pub mod confirm_popup;
pub mod details_popup;
pub mod help_overlay;
pub mod markup;
pub mod status_row;
pub mod task_form;

mod helpers;
#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Draw one frame and rebuild the hit regions input handling reads
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.layout.clear();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (1 row) | board | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    board_view::render_header(frame, app, chunks[0]);
    board_view::render_board(frame, app, chunks[1]);

    match app.mode {
        Mode::Board => {}
        Mode::Details => details_popup::render_details_popup(frame, app, area),
        Mode::Form => task_form::render_task_form(frame, app, area),
        Mode::Confirm => confirm_popup::render_confirm_popup(frame, app, area),
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use test_helpers::*;

    #[test]
    fn test_full_frame_smoke() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("TubeTasker"));
        assert!(output.contains("Waiting Area (1)"));
        assert!(output.contains("Completed (1)"));
        assert!(output.contains("1 waiting"));
        assert_eq!(app.layout.bubbles.len(), 2);
        assert!(app.layout.create_button.is_some());
    }

    #[test]
    fn test_layout_is_rebuilt_each_frame() {
        let mut app = sample_app();
        let id = app.board.view().todo[0].id;
        app.open_details(id);
        render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(!app.layout.buttons.is_empty());

        app.close_popups();
        render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(app.layout.buttons.is_empty());
        assert!(app.layout.popup.is_none());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = sample_app();
        for (w, h) in [(1, 1), (5, 3), (12, 6)] {
            render_to_string(w, h, |frame, _| render(frame, &mut app));
        }
        app.open_create_form();
        render_to_string(10, 4, |frame, _| render(frame, &mut app));
        assert!(!app.layout.inside_popup(Point::new(100, 100)));
    }
}
