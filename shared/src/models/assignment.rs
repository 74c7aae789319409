//! Assignment payloads
//!
//! Collaborator↔zone links live in the server's ledger; only the batch
//! request body crosses the wire.

use serde::{Deserialize, Serialize};

/// Batch-assign request: every listed zone is linked to the
/// collaborator, ids that are already linked are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignZonesRequest {
    pub zone_ids: Vec<i64>,
}
