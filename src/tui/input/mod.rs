mod board;
mod form;
mod gesture;
mod mouse;
mod popups;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::{App, Mode};

use board::handle_board_key;
use form::handle_form_key;
use gesture::apply_gesture_event;
use popups::{handle_confirm_key, handle_details_key};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Board => handle_board_key(app, key),
        Mode::Details => handle_details_key(app, key),
        Mode::Form => handle_form_key(app, key),
        Mode::Confirm => handle_confirm_key(app, key),
    }
}

/// Handle a mouse event; `now` stamps the gesture timers
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    mouse::handle_mouse(app, mouse, now);
}

/// Terminal lost focus: a drag in flight snaps back
pub fn handle_focus_lost(app: &mut App) {
    if let Some(event) = app.gestures.cancel() {
        apply_gesture_event(app, event);
    }
}

/// Poll gesture timers once per loop iteration
pub fn handle_tick(app: &mut App, now: Instant) {
    if let Some(event) = app.gestures.tick(now) {
        apply_gesture_event(app, event);
    }
}
