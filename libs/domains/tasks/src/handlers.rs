//! HTTP handlers and OpenAPI documentation for the tasks API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use axum_helpers::errors::responses::{
    BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
    InternalServerErrorResponse, NotFoundResponse,
};
use axum_helpers::extractors::{IdPath, JsonBody};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

const TAG: &str = "tasks";

#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(
        schemas(Task, CreateTask, UpdateTask, DeleteTaskResponse),
        responses(
            InternalServerErrorResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            NotFoundResponse,
            ConflictResponse
        )
    ),
    tags((name = TAG, description = "Task management endpoints"))
)]
pub struct ApiDoc;

/// Response body for a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteTaskResponse {
    /// Human-readable confirmation
    #[schema(example = "Task 1 deleted successfully")]
    pub message: String,
}

/// Build the `/tasks` router with the given service as state.
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    Router::new()
        .route("/getAll", get(list_tasks))
        .route("/", post(create_task))
        .route("/{id}", get(get_task).put(update_task).delete(delete_task))
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "/getAll",
    tag = TAG,
    responses(
        (status = 200, description = "All tasks ordered by id", body = Vec<Task>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    JsonBody(input): JsonBody<CreateTask>,
) -> TaskResult<(StatusCode, Json<Task>)> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "The requested task", body = Task),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
) -> TaskResult<Json<Task>> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Task id")),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task after the update", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateTask>,
) -> TaskResult<Json<Task>> {
    let task = service.update_task(id, input).await?;
    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted", body = DeleteTaskResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
) -> TaskResult<Json<DeleteTaskResponse>> {
    service.delete_task(id).await?;
    Ok(Json(DeleteTaskResponse {
        message: format!("Task {id} deleted successfully"),
    }))
}
