//! Utility module - common helpers and type aliases
//!
//! - [`AppError`] / [`AppResult`] - application error types (from `shared::error`)
//! - logging and validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{AppError, ErrorCode};
pub use result::AppResult;
