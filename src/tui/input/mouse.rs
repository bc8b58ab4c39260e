use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::model::Point;
use crate::tui::app::{App, Mode};

use super::apply_gesture_event;
use super::board::scroll_container;
use super::popups::press_button;

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let point = Point::new(i32::from(mouse.column), i32::from(mouse.row));
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => left_down(app, point, now),
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(event) = app.gestures.pointer_move(point, now) {
                apply_gesture_event(app, event);
            }
        }
        // Always forwarded: a release must end the gesture even over a popup
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(event) = app.gestures.pointer_up(point, now) {
                apply_gesture_event(app, event);
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            if app.mode != Mode::Board || app.show_help {
                return;
            }
            if let Some(status) = app.layout.container_at(point) {
                let rows = if mouse.kind == MouseEventKind::ScrollDown { 1 } else { -1 };
                scroll_container(app, status, rows);
            }
        }
        MouseEventKind::Moved => {
            let target = if app.mode == Mode::Board && !app.show_help {
                app.layout.bubble_at(point)
            } else {
                None
            };
            app.gestures.hover(target, now);
        }
        _ => {}
    }
}

fn left_down(app: &mut App, point: Point, now: Instant) {
    app.status_message = None;
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.mode != Mode::Board {
        if let Some(button) = app.layout.button_at(point) {
            press_button(app, button);
            return;
        }
        // Clicking off the details popup dismisses it and lands on the board,
        // so a second click on the same bubble can still become a double-click
        if app.mode != Mode::Details || app.layout.inside_popup(point) {
            return;
        }
        app.close_popups();
    }

    if app.layout.on_create_button(point) {
        app.open_create_form();
        return;
    }
    if let Some(id) = app.layout.bubble_at(point)
        && let Some(task) = app.board.task(id)
    {
        app.gestures.pointer_down(task, point, now);
    }
}
