//! Collaborator assignment API Handlers
//!
//! Collaborator records themselves live in the user service; these
//! routes only manage the collaborator↔zone ledger and the resolved
//! territory view. Unknown ids are accepted as no-ops by design.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::assignment;
use crate::utils::AppResult;
use crate::views::ClientZoneView;
use shared::models::{AssignZonesRequest, Zone};

/// GET /api/collaborators/:id/zones - raw edge zone ids
pub async fn list_zone_ids(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<i64>>> {
    let ids = assignment::zones_of(&state.pool, id).await?;
    Ok(Json(ids))
}

/// POST /api/collaborators/:id/zones - batch-assign zones
///
/// Idempotent: already-linked zones are skipped. Responds with the
/// collaborator's full id list after the batch.
pub async fn assign(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssignZonesRequest>,
) -> AppResult<Json<Vec<i64>>> {
    assignment::assign_many(&state.pool, id, &payload.zone_ids).await?;
    tracing::info!(
        collaborator_id = id,
        count = payload.zone_ids.len(),
        "Zones assigned"
    );
    let ids = assignment::zones_of(&state.pool, id).await?;
    Ok(Json(ids))
}

/// DELETE /api/collaborators/:id/zones/:zone_id - remove one zone
pub async fn unassign_one(
    State(state): State<ServerState>,
    Path((id, zone_id)): Path<(i64, i64)>,
) -> AppResult<Json<bool>> {
    assignment::unassign_one(&state.pool, id, zone_id).await?;
    tracing::info!(collaborator_id = id, zone_id, "Zone unassigned");
    Ok(Json(true))
}

/// DELETE /api/collaborators/:id/zones - remove every zone
pub async fn unassign_all(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    assignment::unassign_all(&state.pool, id).await?;
    tracing::info!(collaborator_id = id, "All zones unassigned");
    Ok(Json(true))
}

/// GET /api/collaborators/:id/territory - resolved zone records
///
/// Edges pointing at deleted zones are silently dropped by the view.
pub async fn territory(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Zone>>> {
    let view = ClientZoneView::new(state.pool.clone(), state.client_directory());
    let zones = view.zones_of(id).await?;
    Ok(Json(zones))
}
