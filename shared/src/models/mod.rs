//! Data models
//!
//! Shared between zonal-server and the dashboard (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`
//! or a hand-written `FromRow` where a column needs JSON decoding.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod assignment;
pub mod client;
pub mod zone;

// Re-exports
pub use assignment::*;
pub use client::*;
pub use zone::*;
