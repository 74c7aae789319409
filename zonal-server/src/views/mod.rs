//! Read projections
//!
//! Pure query-side views over the store, the ledger, and the external
//! client directory. Nothing here mutates.

pub mod client_zone;

pub use client_zone::ClientZoneView;
