//! Shared helpers for the integration suite
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use shared::error::ApiResult;
use shared::geometry::GeoPoint;
use shared::models::Client;
use zonal_server::db::DbService;
use zonal_server::services::ClientDirectory;
use zonal_server::{Config, ServerState};

/// In-memory stand-in for the external client directory
pub struct StaticDirectory {
    pub clients: Vec<Client>,
}

#[async_trait]
impl ClientDirectory for StaticDirectory {
    async fn clients_of_zone(&self, zone_id: i64) -> ApiResult<Vec<Client>> {
        Ok(self
            .clients
            .iter()
            .filter(|c| c.zone_id == zone_id)
            .cloned()
            .collect())
    }
}

/// Fresh server state over a throwaway database.
///
/// The TempDir must stay alive for the duration of the test.
pub async fn test_state(clients: Vec<Client>) -> (TempDir, ServerState) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("zonal-test.db");
    let db = DbService::new(&db_path.to_string_lossy())
        .await
        .expect("db service");

    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::new(config, db.pool, Arc::new(StaticDirectory { clients }));
    (dir, state)
}

pub fn triangle() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(4.53, -75.68),
        GeoPoint::new(4.54, -75.68),
        GeoPoint::new(4.54, -75.67),
    ]
}

pub fn client(id: i64, name: &str, zone_id: i64) -> Client {
    Client {
        id,
        name: name.to_string(),
        zone_id,
        address: None,
    }
}
