//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::zone;
use crate::utils::{AppError, AppResult};
use crate::views::ClientZoneView;
use shared::models::{Client, Zone, ZoneCreate, ZoneUpdate};

/// GET /api/zones - list every zone with its derived assigned flag
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Zone>>> {
    let zones = zone::find_all(&state.pool).await?;
    Ok(Json(zones))
}

/// GET /api/zones/:id - fetch a single zone
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Zone>> {
    let zone = zone::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {}", id)))?;
    Ok(Json(zone))
}

/// POST /api/zones - create a zone
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ZoneCreate>,
) -> AppResult<Json<Zone>> {
    let zone = zone::create(&state.pool, payload).await?;
    tracing::info!(zone_id = zone.id, name = %zone.name, "Zone created");
    Ok(Json(zone))
}

/// PUT /api/zones/:id - full replace of the mutable fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ZoneUpdate>,
) -> AppResult<Json<Zone>> {
    let zone = zone::update(&state.pool, id, payload).await?;
    tracing::info!(zone_id = zone.id, "Zone updated");
    Ok(Json(zone))
}

/// DELETE /api/zones/:id - hard delete
///
/// Unconditional: assignment edges and client bindings are not
/// consulted; ledger and view reads filter the dangling references.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = zone::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Zone {}", id)));
    }
    tracing::info!(zone_id = id, "Zone deleted");
    Ok(Json(true))
}

/// GET /api/zones/:id/clients - clients bound to the zone
pub async fn list_clients(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Client>>> {
    let view = ClientZoneView::new(state.pool.clone(), state.client_directory());
    let clients = view.clients_of(id).await?;
    Ok(Json(clients))
}
