use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::TaskId;
use crate::ops::board::Confirm;
use crate::tui::app::{App, ConfirmAction, Mode, PopupButton};

use super::form::{cancel_form, submit_form};

/// Answer already given in the confirm popup, replayed to the board
struct PopupAnswer(bool);

impl Confirm for PopupAnswer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

pub(super) fn handle_details_key(app: &mut App, key: KeyEvent) {
    let Some(id) = app.details else {
        app.mode = Mode::Board;
        return;
    };
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('e')) => app.open_edit_form(id),
        (KeyModifiers::NONE, KeyCode::Char('d')) => app.ask_delete(id),
        (KeyModifiers::NONE, KeyCode::Char(' ')) => toggle_task(app, id),
        (KeyModifiers::NONE, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.close_popups(),
        (_, KeyCode::Char('?')) => app.show_help = true,
        _ => {}
    }
}

pub(super) fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => resolve_confirm(app, true),
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => resolve_confirm(app, false),
        _ => {}
    }
}

pub(super) fn press_button(app: &mut App, button: PopupButton) {
    match button {
        PopupButton::CloseDetails => app.close_popups(),
        PopupButton::EditTask(id) => app.open_edit_form(id),
        PopupButton::ToggleTask(id) => toggle_task(app, id),
        PopupButton::DeleteTask(id) => app.ask_delete(id),
        PopupButton::ConfirmYes => resolve_confirm(app, true),
        PopupButton::ConfirmNo => resolve_confirm(app, false),
        PopupButton::PickEmoji(idx) => {
            if let Some(form) = app.form.as_mut() {
                form.pick_emoji(idx);
            }
        }
        PopupButton::FocusField(field) => {
            if let Some(form) = app.form.as_mut() {
                form.focus = field;
            }
        }
        PopupButton::SaveForm => submit_form(app),
        PopupButton::CancelForm => cancel_form(app),
    }
}

fn toggle_task(app: &mut App, id: TaskId) {
    match app.board.on_toggle_status(id) {
        Some(status) => {
            app.status_message = Some(format!("Moved to {}", status.container_label()));
        }
        None => app.forget_task(id),
    }
}

fn resolve_confirm(app: &mut App, accepted: bool) {
    let Some(action) = app.confirm.take() else {
        app.mode = Mode::Board;
        return;
    };
    app.mode = Mode::Board;
    match action {
        ConfirmAction::DeleteTask { task_id } => {
            if let Some(task) = app.board.on_delete(task_id, &mut PopupAnswer(accepted)) {
                app.forget_task(task.id);
                app.status_message = Some(format!("Popped {} {}", task.emoji, task.title));
            }
        }
    }
}
