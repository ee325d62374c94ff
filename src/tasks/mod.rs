//! Task Store
//!
//! Owns the persisted task list. Hydrated once from the durable slot,
//! then mirrors the full sequence back on every mutation. Persistence is
//! best-effort: write failures are logged and never surface to callers.


use std::sync::Arc;

use chrono::Utc;
use log::warn;

use crate::domain::{Task, TaskCounts, TaskFilter};
use crate::storage::{KeyValueStore, TASKS_KEY};

/// Persisted, ordered task list
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Arc<dyn KeyValueStore>,
}

impl TaskStore {
    /// Hydrate from the durable slot.
    /// An absent or malformed payload starts an empty list.
    pub fn hydrate(storage: Arc<dyn KeyValueStore>) -> Self {
        let tasks = storage
            .get(TASKS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { tasks, storage }
    }

    /// Append a new task.
    /// Whitespace-only text is silently rejected and nothing changes.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(self.next_id(), text.to_string());
        self.tasks.push(task);
        self.persist();
        self.tasks.last()
    }

    /// Flip completion on the matching task; unknown ids are a no-op
    pub fn toggle(&mut self, id: i64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            self.persist();
        }
    }

    /// Delete the matching task; unknown ids are a no-op
    pub fn remove(&mut self, id: i64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Order-preserving view of the tasks selected by `filter`
    pub fn filter(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.matches(filter))
    }

    /// Sizes of the three filtered views
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            all: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// The full ordered sequence
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    // Creation-time-derived, bumped past the newest task so rapid adds
    // within one millisecond stay unique and monotonic.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.tasks.last() {
            Some(last) if last.id >= now => last.id + 1,
            _ => now,
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(payload) => {
                if let Err(e) = self.storage.set(TASKS_KEY, &payload) {
                    warn!("Failed to persist tasks: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize tasks: {}", e),
        }
    }
}
