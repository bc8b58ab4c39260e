use std::cmp::Reverse;

use crate::model::task::{Status, Task};

/// The two status-partitioned, newest-first sequences the board draws
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub todo: Vec<Task>,
    pub done: Vec<Task>,
}

impl BoardView {
    /// Sequence for one container
    pub fn sequence(&self, status: Status) -> &[Task] {
        match status {
            Status::Todo => &self.todo,
            Status::Done => &self.done,
        }
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todo.is_empty() && self.done.is_empty()
    }
}

/// Partition tasks by status and order each side newest first.
///
/// Equal `created_at` values fall back to the newer id first, which matches
/// the store's front-insertion order.
pub fn project<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> BoardView {
    let mut view = BoardView::default();
    for task in tasks {
        match task.status {
            Status::Todo => view.todo.push(task.clone()),
            Status::Done => view.done.push(task.clone()),
        }
    }
    view.todo.sort_by_key(|t| (Reverse(t.created_at), Reverse(t.id)));
    view.done.sort_by_key(|t| (Reverse(t.created_at), Reverse(t.id)));
    view
}
