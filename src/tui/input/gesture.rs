use log::debug;

use crate::gesture::GestureEvent;
use crate::ops::board::DropOutcome;
use crate::tui::app::App;

/// Route a resolved gesture to the board and the popups it opens
pub(super) fn apply_gesture_event(app: &mut App, event: GestureEvent) {
    match event {
        GestureEvent::DragStarted { task, .. } => {
            if app.board.on_drag_start(task).is_none() {
                app.gestures.forget(task);
            }
        }
        GestureEvent::Dropped {
            task,
            origin,
            point,
        } => {
            match app.board.on_drag_release(task, origin, point, &app.layout) {
                DropOutcome::Moved { to, .. } => {
                    if let Some(t) = app.board.task(task) {
                        app.status_message =
                            Some(format!("{} {} moved to {}", t.emoji, t.title, to.container_label()));
                    }
                }
                DropOutcome::Outside => {
                    app.status_message = Some("Dropped outside the board, snapped back".into());
                }
                DropOutcome::SameContainer | DropOutcome::Unknown => {}
            }
        }
        GestureEvent::DragCancelled { task } => {
            debug!("event=drag_snap_back id={task}");
            app.status_message = Some("Drag cancelled".into());
        }
        GestureEvent::Click(task) => app.open_details(task),
        GestureEvent::DoubleClick(task) => app.open_edit_form(task),
        GestureEvent::LongPress(task) => app.ask_delete(task),
        // Preview is read straight from the controller at render time
        GestureEvent::HoverIntent(_) => {}
    }
}
