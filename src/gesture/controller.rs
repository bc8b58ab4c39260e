//! Drag session controller: one pointer stream, four interpretations.
//!
//! A press on a bubble ends as exactly one of:
//!
//! - **Click** / **DoubleClick**: released without crossing the drag
//!   threshold, before the long-press delay. A second click on the same
//!   bubble inside the double-click window upgrades to `DoubleClick`.
//! - **LongPress**: held still past the long-press delay. The later release
//!   emits nothing.
//! - **Drag**: moved at least `drag_threshold` cells. Cancels the pending
//!   long-press; the release emits `Dropped` instead of a click.
//!
//! Timers are polled through [`DragController::tick`], which is the only
//! asynchronous re-entry point.

use std::time::Instant;

use log::debug;

use crate::gesture::timers::Timers;
use crate::model::config::GestureConfig;
use crate::model::geometry::Point;
use crate::model::task::{Status, Task, TaskId};

/// One in-flight pointer gesture on a bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub task: TaskId,
    /// Container the task was in when the pointer went down
    pub origin: Status,
    pub start: Point,
    pub current: Point,
    /// True once the drag threshold has been crossed
    pub moved: bool,
}

/// Controller state. `Clicked` is not held: the click is emitted on release
/// and the controller goes straight back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    PointerDown(DragSession),
    Dragging(DragSession),
    /// Long-press already fired; waiting for the pointer to lift
    LongPressFired { task: TaskId },
}

/// What a gesture resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    DragStarted { task: TaskId, origin: Status },
    Dropped { task: TaskId, origin: Status, point: Point },
    DragCancelled { task: TaskId },
    Click(TaskId),
    DoubleClick(TaskId),
    LongPress(TaskId),
    HoverIntent(TaskId),
}

#[derive(Debug, Clone, Copy)]
struct LastClick {
    task: TaskId,
    at: Instant,
}

#[derive(Debug, Clone)]
pub struct DragController {
    config: GestureConfig,
    state: GestureState,
    timers: Timers,
    last_click: Option<LastClick>,
    hover_target: Option<TaskId>,
    preview: Option<TaskId>,
}

impl DragController {
    pub fn new(config: GestureConfig) -> Self {
        DragController {
            config,
            state: GestureState::Idle,
            timers: Timers::default(),
            last_click: None,
            hover_target: None,
            preview: None,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// The live drag, once the threshold has been crossed
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            GestureState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Origin container of the drag in flight, for emphasis and layering
    pub fn active_container(&self) -> Option<Status> {
        self.session().map(|s| s.origin)
    }

    /// Bubble whose hover preview is showing
    pub fn preview(&self) -> Option<TaskId> {
        self.preview
    }

    // -----------------------------------------------------------------------
    // Pointer input
    // -----------------------------------------------------------------------

    pub fn pointer_down(&mut self, task: &Task, point: Point, now: Instant) {
        if self.state != GestureState::Idle {
            debug!("event=gesture_reset reason=pointer_down_while_active");
        }
        self.timers.cancel_all();
        self.hover_target = None;
        self.preview = None;
        self.timers.long_press.arm(now, self.config.long_press());
        self.state = GestureState::PointerDown(DragSession {
            task: task.id,
            origin: task.status,
            start: point,
            current: point,
            moved: false,
        });
    }

    pub fn pointer_move(&mut self, point: Point, now: Instant) -> Option<GestureEvent> {
        if let Some(event) = self.fire_long_press(now) {
            return Some(event);
        }
        match &mut self.state {
            GestureState::PointerDown(session) => {
                session.current = point;
                if session.start.manhattan_distance(point) < self.config.drag_threshold {
                    return None;
                }
                session.moved = true;
                let session = *session;
                self.timers.long_press.cancel();
                self.state = GestureState::Dragging(session);
                debug!("event=drag_begin id={} origin={}", session.task, session.origin);
                Some(GestureEvent::DragStarted {
                    task: session.task,
                    origin: session.origin,
                })
            }
            GestureState::Dragging(session) => {
                session.current = point;
                None
            }
            GestureState::Idle | GestureState::LongPressFired { .. } => None,
        }
    }

    pub fn pointer_up(&mut self, point: Point, now: Instant) -> Option<GestureEvent> {
        if let Some(event) = self.fire_long_press(now) {
            self.state = GestureState::Idle;
            return Some(event);
        }
        let state = std::mem::take(&mut self.state);
        self.timers.long_press.cancel();
        match state {
            GestureState::Dragging(session) => Some(GestureEvent::Dropped {
                task: session.task,
                origin: session.origin,
                point,
            }),
            GestureState::PointerDown(session) => Some(self.register_click(session.task, now)),
            GestureState::LongPressFired { .. } | GestureState::Idle => None,
        }
    }

    /// Pointer resting over `task` (or nothing) with no button held
    pub fn hover(&mut self, task: Option<TaskId>, now: Instant) {
        if self.state != GestureState::Idle || task == self.hover_target {
            return;
        }
        self.hover_target = task;
        self.preview = None;
        match task {
            Some(_) => self.timers.hover_intent.arm(now, self.config.hover_intent()),
            None => self.timers.hover_intent.cancel(),
        }
    }

    /// Poll timers; call on every event-loop iteration
    pub fn tick(&mut self, now: Instant) -> Option<GestureEvent> {
        if let Some(event) = self.fire_long_press(now) {
            return Some(event);
        }
        if self.timers.hover_intent.poll(now)
            && let Some(task) = self.hover_target
        {
            self.preview = Some(task);
            return Some(GestureEvent::HoverIntent(task));
        }
        None
    }

    /// Abort the gesture (Esc, focus loss). A live drag snaps back.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        self.timers.cancel_all();
        self.hover_target = None;
        self.preview = None;
        match std::mem::take(&mut self.state) {
            GestureState::Dragging(session) => {
                debug!("event=drag_cancel id={}", session.task);
                Some(GestureEvent::DragCancelled { task: session.task })
            }
            _ => None,
        }
    }

    /// The bubble for `task` went away; drop anything that references it
    pub fn forget(&mut self, task: TaskId) {
        let references = match self.state {
            GestureState::PointerDown(s) | GestureState::Dragging(s) => s.task == task,
            GestureState::LongPressFired { task: t } => t == task,
            GestureState::Idle => false,
        };
        if references {
            self.state = GestureState::Idle;
            self.timers.long_press.cancel();
        }
        if self.hover_target == Some(task) {
            self.hover_target = None;
            self.timers.hover_intent.cancel();
        }
        if self.preview == Some(task) {
            self.preview = None;
        }
        if self.last_click.is_some_and(|c| c.task == task) {
            self.last_click = None;
        }
    }

    /// Long-press deadline passed while still pressed. Input events check
    /// this too, so a release queued ahead of the next tick is not a click.
    fn fire_long_press(&mut self, now: Instant) -> Option<GestureEvent> {
        if self.timers.long_press.poll(now)
            && let GestureState::PointerDown(session) = self.state
        {
            self.state = GestureState::LongPressFired { task: session.task };
            self.last_click = None;
            debug!("event=long_press id={}", session.task);
            return Some(GestureEvent::LongPress(session.task));
        }
        None
    }

    fn register_click(&mut self, task: TaskId, now: Instant) -> GestureEvent {
        let is_double = self.last_click.is_some_and(|last| {
            last.task == task
                && now.saturating_duration_since(last.at) <= self.config.double_click_window()
        });
        if is_double {
            self.last_click = None;
            GestureEvent::DoubleClick(task)
        } else {
            self.last_click = Some(LastClick { task, at: now });
            GestureEvent::Click(task)
        }
    }
}
