use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Status;
use crate::tui::app::App;

use super::apply_gesture_event;

pub(super) fn handle_board_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (KeyModifiers::NONE, KeyCode::Char('n')) => app.open_create_form(),
        (_, KeyCode::Char('?')) => app.show_help = true,
        (KeyModifiers::NONE, KeyCode::Up) => scroll_container(app, Status::Todo, -1),
        (KeyModifiers::NONE, KeyCode::Down) => scroll_container(app, Status::Todo, 1),
        (KeyModifiers::SHIFT, KeyCode::Up) => scroll_container(app, Status::Done, -1),
        (KeyModifiers::SHIFT, KeyCode::Down) => scroll_container(app, Status::Done, 1),
        (_, KeyCode::Esc) => {
            if let Some(event) = app.gestures.cancel() {
                apply_gesture_event(app, event);
            }
        }
        _ => {}
    }
}

/// Shift a container by whole bubble rows; the renderer clamps the far end
pub(super) fn scroll_container(app: &mut App, status: Status, rows: isize) {
    let offset = app.scroll_mut(status);
    *offset = offset.saturating_add_signed(rows);
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_support::*;
    use crate::model::AppConfig;
    use crate::ops::board::Board;
    use crate::tui::app::{App, Mode};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_n_opens_create_form() {
        let mut app = App::new(Board::new(), &AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.mode, Mode::Form);
        assert!(app.form.as_ref().is_some_and(|f| f.editing().is_none()));
    }

    #[test]
    fn test_q_quits() {
        let mut app = App::new(Board::new(), &AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrows_scroll_containers() {
        let mut app = App::new(Board::new(), &AppConfig::default());
        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.todo_scroll, 0);
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.todo_scroll, 2);
        handle_key(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));
        assert_eq!(app.done_scroll, 1);
        assert_eq!(app.todo_scroll, 2);
    }
}
