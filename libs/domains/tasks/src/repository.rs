//! Repository trait and an in-memory implementation.
//!
//! The in-memory store mirrors the behaviour of the Postgres-backed
//! repository (id assignment, title uniqueness, timestamp handling) so
//! handler and service tests can run without a database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{TaskError, TaskResult};
use crate::models::{NewTask, Task, TaskChanges};

/// Data access contract for tasks.
///
/// Implementations report duplicate titles as [`TaskError::DuplicateTitle`]
/// and leave existence checks for updates/deletes to the caller where
/// they can do so cheaply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List all tasks ordered by id.
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Insert a new task, assigning id and timestamps.
    async fn insert(&self, input: NewTask) -> TaskResult<Task>;

    /// Fetch a single task, `None` when the id is unknown.
    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>>;

    /// Apply the given changes and refresh `updated_at`.
    async fn update(&self, id: i32, changes: TaskChanges) -> TaskResult<Task>;

    /// Delete a task. Returns whether a row was actually removed.
    async fn delete(&self, id: i32) -> TaskResult<bool>;
}

/// In-memory repository backed by a `BTreeMap` keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<BTreeMap<i32, Task>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    fn title_taken(tasks: &BTreeMap<i32, Task>, title: &str, exclude_id: Option<i32>) -> bool {
        tasks
            .values()
            .any(|task| task.title == title && Some(task.id) != exclude_id)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|e| TaskError::Internal(e.to_string()))?;
        Ok(tasks.values().cloned().collect())
    }

    async fn insert(&self, input: NewTask) -> TaskResult<Task> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|e| TaskError::Internal(e.to_string()))?;

        if Self::title_taken(&tasks, &input.title, None) {
            return Err(TaskError::DuplicateTitle);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        tasks.insert(id, task.clone());

        tracing::info!(task_id = %id, "task created");
        Ok(task)
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|e| TaskError::Internal(e.to_string()))?;
        Ok(tasks.get(&id).cloned())
    }

    async fn update(&self, id: i32, changes: TaskChanges) -> TaskResult<Task> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|e| TaskError::Internal(e.to_string()))?;

        // Existence first, then uniqueness, matching the Postgres
        // implementation's find-then-update ordering.
        if !tasks.contains_key(&id) {
            return Err(TaskError::NotFound(id));
        }

        if let Some(new_title) = &changes.title {
            if Self::title_taken(&tasks, new_title, Some(id)) {
                return Err(TaskError::DuplicateTitle);
            }
        }

        let task = tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
        task.apply_changes(changes);

        tracing::info!(task_id = %id, "task updated");
        Ok(task.clone())
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|e| TaskError::Internal(e.to_string()))?;
        let removed = tasks.remove(&id).is_some();
        if removed {
            tracing::info!(task_id = %id, "task deleted");
        }
        Ok(removed)
    }
}
