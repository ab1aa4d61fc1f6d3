//! Shared application state passed to request handlers.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// Cloning is cheap: the database connection shares its underlying pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SeaORM connection pool
    pub db: DatabaseConnection,
}
