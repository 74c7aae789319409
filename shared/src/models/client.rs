//! Client Model
//!
//! Clients are registered elsewhere; this core only reads them through
//! the client-directory interface, bound to a zone by `zone_id`.

use serde::{Deserialize, Serialize};

/// Client record as the external directory returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub zone_id: i64,
    #[serde(default)]
    pub address: Option<String>,
}
