use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::tui::form::{FormField, FormMode, MarkupKind};

pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.form.as_mut() else {
        app.mode = Mode::Board;
        return;
    };

    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => cancel_form(app),
        (_, KeyCode::Tab) => form.focus = form.focus.next(),
        (_, KeyCode::BackTab) => form.focus = form.focus.prev(),
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => form.insert_markup(MarkupKind::Bold),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => form.insert_markup(MarkupKind::Strike),
        (KeyModifiers::CONTROL, KeyCode::Char('l')) => form.insert_markup(MarkupKind::List),
        (m, KeyCode::Enter) if m.contains(KeyModifiers::ALT) => {
            if form.focus == FormField::Description {
                form.description.insert_char('\n');
            }
        }
        (_, KeyCode::Enter) => submit_form(app),
        (_, KeyCode::Left) if form.focus == FormField::Emoji => form.cycle_emoji(false),
        (_, KeyCode::Right) if form.focus == FormField::Emoji => form.cycle_emoji(true),
        (_, code) => {
            let Some(field) = form.focused_text() else {
                return;
            };
            match code {
                KeyCode::Left => field.move_left(),
                KeyCode::Right => field.move_right(),
                KeyCode::Home => field.move_home(),
                KeyCode::End => field.move_end(),
                KeyCode::Backspace => field.backspace(),
                KeyCode::Delete => field.delete_forward(),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    field.insert_char(c);
                }
                _ => {}
            }
        }
    }
}

pub(super) fn cancel_form(app: &mut App) {
    app.form = None;
    app.mode = Mode::Board;
}

/// Commit the form through the board and close it
pub(super) fn submit_form(app: &mut App) {
    let Some(form) = app.form.take() else {
        app.mode = Mode::Board;
        return;
    };
    app.mode = Mode::Board;

    let title = form.title.text.trim();
    let description = form.description.text.as_str();
    match form.mode {
        FormMode::Create => {
            let task = app.board.on_create(title, description, &form.emoji);
            app.status_message = Some(format!("Created {} {}", task.emoji, task.title));
        }
        FormMode::Edit(id) => {
            if app.board.on_update(id, title, description, &form.emoji) {
                app.status_message = Some("Saved".into());
            } else {
                app.forget_task(id);
                app.status_message = Some(format!("{id} no longer exists"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_support::*;
    use super::*;
    use crate::model::{AppConfig, DEFAULT_TITLE, EMOJI_PALETTE};
    use crate::ops::board::Board;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use pretty_assertions::assert_eq;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn alt_enter() -> KeyEvent {
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_create_through_form() {
        let mut app = App::new(Board::new(), &AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('n')));
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "2 litres");
        handle_key(&mut app, alt_enter());
        handle_key(&mut app, ctrl('b'));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Board);
        let todo = &app.board.view().todo;
        assert_eq!(todo.len(), 1);
        assert_eq!(todo[0].title, "Buy milk");
        assert_eq!(todo[0].description, "2 litres\n**text**");
    }

    #[test]
    fn test_empty_title_gets_default() {
        let mut app = App::new(Board::new(), &AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('n')));
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.board.view().todo[0].title, DEFAULT_TITLE);
    }

    #[test]
    fn test_emoji_field_cycles_palette() {
        let mut app = App::new(Board::new(), &AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('n')));
        handle_key(&mut app, key(KeyCode::BackTab));
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(
            app.form.as_ref().map(|f| f.emoji.as_str()),
            Some(EMOJI_PALETTE[0])
        );
        // Typed characters are ignored while the emoji field has focus
        type_str(&mut app, "x");
        assert_eq!(app.form.as_ref().map(|f| f.title.text.as_str()), Some(""));
    }

    #[test]
    fn test_edit_saves_changes() {
        let mut board = Board::new();
        let task = board.on_create("Walk", "", "🐕");
        let mut app = App::new(board, &AppConfig::default());
        app.open_edit_form(task.id);
        type_str(&mut app, " dog");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(
            app.board.task(task.id).map(|t| t.title.as_str()),
            Some("Walk dog")
        );
    }

    #[test]
    fn test_esc_discards_form() {
        let mut app = App::new(Board::new(), &AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('n')));
        type_str(&mut app, "nope");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Board);
        assert!(app.board.store().is_empty());
    }
}
