use chrono::Utc;
use indexmap::IndexMap;

use crate::model::task::{Status, Task, TaskId, normalize_emoji, normalize_title};

/// Error type for task store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// The authoritative, in-memory set of tasks.
///
/// Iteration order is newest-insert-first; views re-sort by `created_at`, so
/// the order carries no meaning beyond being deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: IndexMap<TaskId, Task>,
    last_seq: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Tasks in store iteration order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Create a todo task stamped with the current wall-clock time.
    pub fn create(&mut self, title: &str, description: &str, emoji: &str) -> Task {
        self.create_at(title, description, emoji, Utc::now().timestamp_millis())
    }

    /// Create a todo task with an explicit creation timestamp (ms since epoch).
    pub fn create_at(
        &mut self,
        title: &str,
        description: &str,
        emoji: &str,
        created_at: i64,
    ) -> Task {
        self.last_seq += 1;
        let task = Task {
            id: TaskId::from_seq(self.last_seq),
            title: normalize_title(title),
            description: description.to_string(),
            emoji: normalize_emoji(emoji),
            status: Status::Todo,
            created_at,
        };
        self.tasks.shift_insert(0, task.id, task.clone());
        task
    }

    /// Replace title, description and emoji. Status and creation time stay.
    pub fn update(
        &mut self,
        id: TaskId,
        title: &str,
        description: &str,
        emoji: &str,
    ) -> Result<(), StoreError> {
        let task = self.get_mut(id)?;
        task.title = normalize_title(title);
        task.description = description.to_string();
        task.emoji = normalize_emoji(emoji);
        Ok(())
    }

    /// Direct status set; a no-op when the status already matches
    pub fn set_status(&mut self, id: TaskId, status: Status) -> Result<(), StoreError> {
        let task = self.get_mut(id)?;
        task.status = status;
        Ok(())
    }

    /// Flip todo ↔ done, returning the new status
    pub fn toggle_status(&mut self, id: TaskId) -> Result<Status, StoreError> {
        let task = self.get_mut(id)?;
        task.status = task.status.flipped();
        Ok(task.status)
    }

    /// Remove a task, returning it
    pub fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        self.tasks
            .shift_remove(&id)
            .ok_or(StoreError::NotFound(id))
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks.get_mut(&id).ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{DEFAULT_EMOJI, DEFAULT_TITLE};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn ids(store: &TaskStore) -> Vec<TaskId> {
        store.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_create_defaults() {
        let mut store = TaskStore::new();
        let task = store.create("   ", "", "");
        assert_eq!(task.title, DEFAULT_TITLE);
        assert_eq!(task.emoji, DEFAULT_EMOJI);
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.description, "");
        assert_eq!(store.get(task.id), Some(&task));
    }

    #[test]
    fn test_create_keeps_markup_verbatim() {
        let mut store = TaskStore::new();
        let task = store.create("Shop", "- **milk**\n- ~~eggs~~", "\u{1F6D2}");
        assert_eq!(task.description, "- **milk**\n- ~~eggs~~");
    }

    #[test]
    fn test_create_inserts_at_front() {
        let mut store = TaskStore::new();
        let a = store.create_at("a", "", "", 100);
        let b = store.create_at("b", "", "", 50);
        assert_eq!(ids(&store), vec![b.id, a.id]);
    }

    #[test]
    fn test_ids_never_reused() {
        let mut store = TaskStore::new();
        let a = store.create("a", "", "");
        store.delete(a.id).unwrap();
        let b = store.create("b", "", "");
        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
    }

    #[test]
    fn test_update_replaces_content_only() {
        let mut store = TaskStore::new();
        let task = store.create_at("old", "desc", "\u{1F680}", 42);
        store.set_status(task.id, Status::Done).unwrap();
        store
            .update(task.id, "  new  ", "other", "\u{1F525}")
            .unwrap();

        let updated = store.get(task.id).unwrap();
        assert_eq!(updated.title, "new");
        assert_eq!(updated.description, "other");
        assert_eq!(updated.emoji, "\u{1F525}");
        assert_eq!(updated.status, Status::Done);
        assert_eq!(updated.created_at, 42);
    }

    #[test]
    fn test_update_blank_title_gets_default() {
        let mut store = TaskStore::new();
        let task = store.create("x", "", "");
        store.update(task.id, "", "", "").unwrap();
        assert_eq!(store.get(task.id).unwrap().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut store = TaskStore::new();
        let task = store.create("x", "", "");
        store.delete(task.id).unwrap();

        assert_eq!(
            store.update(task.id, "y", "", ""),
            Err(StoreError::NotFound(task.id))
        );
        assert_eq!(
            store.set_status(task.id, Status::Done),
            Err(StoreError::NotFound(task.id))
        );
        assert_eq!(
            store.toggle_status(task.id),
            Err(StoreError::NotFound(task.id))
        );
        assert_eq!(store.delete(task.id), Err(StoreError::NotFound(task.id)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_status_idempotent() {
        let mut store = TaskStore::new();
        let task = store.create("x", "", "");
        store.set_status(task.id, Status::Done).unwrap();
        store.set_status(task.id, Status::Done).unwrap();
        assert_eq!(store.get(task.id).unwrap().status, Status::Done);
    }

    #[test]
    fn test_toggle_status_round_trip() {
        let mut store = TaskStore::new();
        let task = store.create("x", "", "");
        assert_eq!(store.toggle_status(task.id), Ok(Status::Done));
        assert_eq!(store.toggle_status(task.id), Ok(Status::Todo));
    }

    #[test]
    fn test_delete_returns_task() {
        let mut store = TaskStore::new();
        let a = store.create("a", "", "");
        let b = store.create("b", "", "");
        let removed = store.delete(a.id).unwrap();
        assert_eq!(removed, a);
        assert_eq!(ids(&store), vec![b.id]);
        assert!(!store.contains(a.id));
    }

    #[test]
    fn test_mixed_operations_keep_ids_unique() {
        let mut store = TaskStore::new();
        let mut live = Vec::new();
        for i in 0..40 {
            match i % 5 {
                0 | 1 => live.push(store.create(&format!("t{i}"), "", "").id),
                2 => {
                    if let Some(id) = live.first().copied() {
                        store.toggle_status(id).unwrap();
                    }
                }
                3 => {
                    if let Some(id) = live.last().copied() {
                        store.update(id, "renamed", "", "").unwrap();
                    }
                }
                _ => {
                    if !live.is_empty() {
                        let id = live.remove(live.len() / 2);
                        store.delete(id).unwrap();
                    }
                }
            }
            let unique: HashSet<TaskId> = store.iter().map(|t| t.id).collect();
            assert_eq!(unique.len(), store.len());
            assert_eq!(store.len(), live.len());
        }
    }
}
