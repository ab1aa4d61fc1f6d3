//! Task domain errors and their HTTP mapping.

use axum::response::{IntoResponse, Response};
use axum_helpers::errors::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task with id {0} not found")]
    NotFound(i32),

    #[error("Task with this title already exists")]
    DuplicateTitle,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Classify a database error. A unique constraint violation is the
    /// one storage failure the API treats as a client error.
    pub(crate) fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::DuplicateTitle,
            _ => Self::Internal(err.to_string()),
        }
    }
}

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(id) => Self::NotFound(format!("Task with id {id} not found")),
            TaskError::DuplicateTitle => {
                Self::Conflict("Task with this title already exists".to_string())
            }
            TaskError::Validation(message) => Self::BadRequest(message),
            TaskError::Internal(detail) => Self::InternalServerError(detail),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
