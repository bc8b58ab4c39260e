use log::{debug, info};

use crate::model::geometry::{ContainerLayout, ContainerRects, Point};
use crate::model::task::{Status, Task, TaskId};
use crate::ops::collision::{classify, transition};
use crate::ops::task_ops::{StoreError, TaskStore};
use crate::ops::view::{BoardView, project};

/// Prompt shown before a bubble is deleted
pub const DELETE_PROMPT: &str = "Pop this task bubble?";

/// Synchronous yes/no collaborator consulted before destructive actions
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// What a drag release did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released over the other container; status changed
    Moved { from: Status, to: Status },
    /// Released back over its own container
    SameContainer,
    /// Released outside both containers; the bubble snaps back
    Outside,
    /// The task or a container rectangle was missing
    Unknown,
}

/// Task store plus its derived view, re-projected after every mutation
#[derive(Debug, Clone, Default)]
pub struct Board {
    store: TaskStore,
    view: BoardView,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board pre-filled with the two welcome bubbles
    pub fn with_sample_tasks(now_ms: i64) -> Self {
        let mut board = Board::new();
        let walk = board
            .store
            .create_at("Walk the Dog", "Remember the leash!", "\u{1F415}", now_ms - 100_000);
        board.mutate("sample", |s| s.set_status(walk.id, Status::Done));
        board.store.create_at(
            "Buy Cookies",
            "- Chocolate Chip\n- ~~Oatmeal~~",
            "\u{1F36A}",
            now_ms,
        );
        board.refresh();
        board
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    fn refresh(&mut self) {
        self.view = project(self.store.iter());
    }

    /// Run a store mutation, re-project, and fold NotFound into `None`
    fn mutate<T>(
        &mut self,
        op: &str,
        f: impl FnOnce(&mut TaskStore) -> Result<T, StoreError>,
    ) -> Option<T> {
        let result = f(&mut self.store);
        self.refresh();
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("event=mutation_skipped op={op} reason=\"{e}\"");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Form / details entry points
    // -----------------------------------------------------------------------

    pub fn on_create(&mut self, title: &str, description: &str, emoji: &str) -> Task {
        let task = self.store.create(title, description, emoji);
        self.refresh();
        info!("event=task_created id={} emoji={}", task.id, task.emoji);
        task
    }

    /// Returns false when the task no longer exists
    pub fn on_update(&mut self, id: TaskId, title: &str, description: &str, emoji: &str) -> bool {
        let updated = self
            .mutate("update", |s| s.update(id, title, description, emoji))
            .is_some();
        if updated {
            info!("event=task_updated id={id}");
        }
        updated
    }

    pub fn on_toggle_status(&mut self, id: TaskId) -> Option<Status> {
        let status = self.mutate("toggle", |s| s.toggle_status(id))?;
        info!("event=task_toggled id={id} status={status}");
        Some(status)
    }

    /// Delete after asking `confirm`. Declining leaves the board untouched.
    pub fn on_delete(&mut self, id: TaskId, confirm: &mut impl Confirm) -> Option<Task> {
        if !self.store.contains(id) {
            debug!("event=mutation_skipped op=delete reason=\"task not found: {id}\"");
            return None;
        }
        if !confirm.confirm(DELETE_PROMPT) {
            debug!("event=delete_declined id={id}");
            return None;
        }
        let task = self.mutate("delete", |s| s.delete(id))?;
        info!("event=task_deleted id={id}");
        Some(task)
    }

    // -----------------------------------------------------------------------
    // Gesture entry points
    // -----------------------------------------------------------------------

    /// Origin container of a drag that just started
    pub fn on_drag_start(&self, id: TaskId) -> Option<Status> {
        let origin = self.store.get(id)?.status;
        debug!("event=drag_start id={id} origin={origin}");
        Some(origin)
    }

    /// Classify a release against the rectangles `layout` reports right now
    /// and commit the implied status change.
    ///
    /// `origin` is the container captured when the drag started; it breaks
    /// ties between overlapping rectangles. The transition itself is judged
    /// against the task's status at release.
    pub fn on_drag_release(
        &mut self,
        id: TaskId,
        origin: Status,
        point: Point,
        layout: &impl ContainerLayout,
    ) -> DropOutcome {
        let Some(current) = self.store.get(id).map(|t| t.status) else {
            debug!("event=drop_ignored id={id} reason=missing_task");
            return DropOutcome::Unknown;
        };
        let Some(rects) = ContainerRects::read(layout) else {
            debug!("event=drop_ignored id={id} reason=missing_layout");
            return DropOutcome::Unknown;
        };
        if origin != current {
            debug!("event=drop_origin_stale id={id} origin={origin} current={current}");
        }

        let classified = classify(point, &rects, origin);
        match transition(classified, current) {
            Some(target) => {
                if self.mutate("drop", |s| s.set_status(id, target)).is_none() {
                    return DropOutcome::Unknown;
                }
                info!(
                    "event=task_dropped id={id} from={current} to={target} x={} y={}",
                    point.x, point.y
                );
                DropOutcome::Moved {
                    from: current,
                    to: target,
                }
            }
            None if classified.is_some() => DropOutcome::SameContainer,
            None => DropOutcome::Outside,
        }
    }
}
