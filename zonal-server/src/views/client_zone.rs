//! Client↔zone membership view
//!
//! Answers "which clients belong to zone Z" and "which zones does
//! collaborator C have", joining the ledger with the zone store and the
//! external directory. No caching; every call reads fresh.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::repository::RepoResult;
use crate::services::ClientDirectory;
use shared::error::ApiResult;
use shared::models::{Client, Zone};

/// Read-only membership projection
#[derive(Clone)]
pub struct ClientZoneView {
    pool: SqlitePool,
    directory: Arc<dyn ClientDirectory>,
}

impl ClientZoneView {
    pub fn new(pool: SqlitePool, directory: Arc<dyn ClientDirectory>) -> Self {
        Self { pool, directory }
    }

    /// Clients bound to the zone, straight from the external directory.
    pub async fn clients_of(&self, zone_id: i64) -> ApiResult<Vec<Client>> {
        self.directory.clients_of_zone(zone_id).await
    }

    /// Resolved zone records for a collaborator, in assignment order.
    ///
    /// Edges whose zone has been deleted are dropped by the join rather
    /// than surfaced as errors; the ledger keeps such edges on purpose.
    pub async fn zones_of(&self, collaborator_id: i64) -> RepoResult<Vec<Zone>> {
        let zones = sqlx::query_as::<_, Zone>(
            "SELECT zone.id, zone.name, zone.description, zone.boundary, zone.created_at, \
                    1 AS assigned \
             FROM zone_assignment a \
             JOIN zone ON zone.id = a.zone_id \
             WHERE a.collaborator_id = ? \
             ORDER BY a.created_at, a.zone_id",
        )
        .bind(collaborator_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(zones)
    }
}
