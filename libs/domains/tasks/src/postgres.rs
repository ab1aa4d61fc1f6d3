//! Postgres-backed repository built on SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use crate::entity::{self, Entity as Tasks};
use crate::error::{TaskError, TaskResult};
use crate::models::{NewTask, Task, TaskChanges};
use crate::repository::TaskRepository;

#[derive(Debug, Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let models = Tasks::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(TaskError::from_db)?;
        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn insert(&self, input: NewTask) -> TaskResult<Task> {
        let active = entity::ActiveModel::from(input);
        let model = active.insert(&self.db).await.map_err(TaskError::from_db)?;

        tracing::info!(task_id = %model.id, "task created");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let model = Tasks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(TaskError::from_db)?;
        Ok(model.map(Task::from))
    }

    async fn update(&self, id: i32, changes: TaskChanges) -> TaskResult<Task> {
        let model = Tasks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(TaskError::from_db)?
            .ok_or(TaskError::NotFound(id))?;

        let mut active = model.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(status) = changes.status {
            active.status = Set(status);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await.map_err(TaskError::from_db)?;

        tracing::info!(task_id = %id, "task updated");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let result = Tasks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(TaskError::from_db)?;

        let removed = result.rows_affected > 0;
        if removed {
            tracing::info!(task_id = %id, "task deleted");
        }
        Ok(removed)
    }
}
