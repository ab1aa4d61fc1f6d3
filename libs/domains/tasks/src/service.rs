//! Task service: request validation and business rules.
//!
//! The service owns every validation rule so the HTTP layer stays a
//! thin adapter and the repository only deals with well-formed input.

use std::sync::Arc;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, NewTask, Task, TaskChanges, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;

#[derive(Debug, Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Create a task. Title is required and non-empty; description
    /// defaults to empty; status defaults to pending.
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        let title = match input.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(TaskError::Validation("Title is required".to_string())),
        };

        let status = parse_status(input.status.as_deref())?;

        let created = self
            .repository
            .insert(NewTask {
                title,
                description: input.description.unwrap_or_default(),
                status,
            })
            .await?;

        // Re-read so the response carries the stored row, defaults and
        // database-assigned timestamps included.
        self.repository
            .get_by_id(created.id)
            .await?
            .ok_or_else(|| {
                TaskError::Internal(format!("task {} vanished after insert", created.id))
            })
    }

    pub async fn get_task(&self, id: i32) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Partially update a task. At least one field must be supplied;
    /// an explicit empty title is rejected rather than ignored.
    pub async fn update_task(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        if input.title.is_none() && input.description.is_none() && input.status.is_none() {
            return Err(TaskError::Validation(
                "At least one field (title, description, status) is required".to_string(),
            ));
        }

        if matches!(&input.title, Some(title) if title.is_empty()) {
            return Err(TaskError::Validation("Title cannot be empty".to_string()));
        }

        let status = match input.status.as_deref() {
            Some(raw) => Some(parse_status(Some(raw))?),
            None => None,
        };

        // Distinguish 404 from other update failures up front
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        self.repository
            .update(
                id,
                TaskChanges {
                    title: input.title,
                    description: input.description,
                    status,
                },
            )
            .await
    }

    pub async fn delete_task(&self, id: i32) -> TaskResult<()> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        let removed = self.repository.delete(id).await?;
        if !removed {
            // Raced with a concurrent delete
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_status(raw: Option<&str>) -> TaskResult<TaskStatus> {
    match raw {
        None => Ok(TaskStatus::default()),
        Some(raw) => raw.parse().map_err(|_| {
            TaskError::Validation("Status must be pending or completed".to_string())
        }),
    }
}
