use std::str::FromStr;

use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

/// Task completion status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    /// Task has not been completed yet
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Task is done
    #[sea_orm(string_value = "completed")]
    Completed,
}

// Hand-written rather than derived: sea-orm's active-enum derive owns
// `TryFrom<&str>`, so a strum `EnumString` derive would collide with it.
impl FromStr for TaskStatus {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(strum::ParseError::VariantNotFound),
        }
    }
}

/// Task entity - the sole domain entity of this service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned by the store, strictly increasing
    pub id: i32,
    /// Task title (unique across all tasks)
    pub title: String,
    /// Task description (empty string when not supplied)
    pub description: String,
    /// Current status
    pub status: TaskStatus,
    /// Creation timestamp, set once and never changed
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, refreshed on every successful update
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new task.
///
/// All fields are optional at the wire level so the service can report
/// the exact validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTask {
    /// Task title (required, non-empty, unique)
    pub title: Option<String>,
    /// Task description (defaults to empty string)
    pub description: Option<String>,
    /// "pending" or "completed" (defaults to "pending")
    pub status: Option<String>,
}

/// DTO for partially updating an existing task.
///
/// An absent field leaves the stored value untouched; a present field
/// replaces it. At least one field must be supplied.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTask {
    /// New title (must be non-empty when supplied)
    pub title: Option<String>,
    /// New description (empty string is a valid value)
    pub description: Option<String>,
    /// "pending" or "completed"
    pub status: Option<String>,
}

/// A validated row ready for insertion: defaults applied, status parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// A validated update set: only the fields to change are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

impl Task {
    /// Apply an update set, refreshing `updated_at`
    pub fn apply_changes(&mut self, changes: TaskChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}
