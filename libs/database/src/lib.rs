//! Database library providing the PostgreSQL connector and utilities
//!
//! This library wraps SeaORM connection management: pool configuration,
//! connect-with-retry for startup resilience, migration running, and
//! health checks for readiness probes.
//!
//! # Examples
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "tasks_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
