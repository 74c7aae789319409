//! External collaborators
//!
//! Services this core consumes but does not own.

pub mod client_directory;

pub use client_directory::{ClientDirectory, HttpClientDirectory};
