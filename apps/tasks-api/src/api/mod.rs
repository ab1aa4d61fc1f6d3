//! API routes module

pub mod health;

use axum::Router;
use domain_tasks::{handlers, PgTaskRepository, TaskService};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let repository = PgTaskRepository::new(state.db.clone());
    let service = TaskService::new(repository);

    Router::new()
        .nest("/tasks", handlers::router(service))
        .merge(health::router(state.clone()))
}
