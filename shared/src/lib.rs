//! Shared types for the Zonal territory-management platform
//!
//! Common types used by the server and its clients: data models, the
//! polygon geometry value type, error types, response structures, and
//! the clock utility.

pub mod error;
pub mod geometry;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use geometry::{GeoPoint, GeometryError, PolygonGeometry};
pub use response::ApiResponse;
