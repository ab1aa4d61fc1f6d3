//! SeaORM entity for the `tasks` table.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::models::{NewTask, Task, TaskStatus};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<NewTask> for ActiveModel {
    fn from(input: NewTask) -> Self {
        // A single timestamp so a freshly created task has
        // created_at == updated_at.
        let now = Utc::now();
        Self {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            status: Set(input.status),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
