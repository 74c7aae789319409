//! Repository Module
//!
//! CRUD operations over the SQLite tables, written as free async
//! functions taking the pool.

pub mod assignment;
pub mod zone;

use shared::error::ApiError;
use shared::geometry::GeometryError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<GeometryError> for RepoError {
    fn from(err: GeometryError) -> Self {
        RepoError::Validation(err.to_string())
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(resource) => ApiError::not_found(resource),
            RepoError::Database(message) => ApiError::database(message),
            RepoError::Validation(message) => ApiError::validation(message),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
