//! Unified error handling
//!
//! The canonical error type lives in `shared::error` so clients can
//! interpret the same codes; handlers use the aliases below.

pub use shared::error::{ApiError as AppError, ApiErrorCode as ErrorCode};
