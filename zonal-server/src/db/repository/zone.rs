//! Zone Repository
//!
//! Single source of truth for zone records. `assigned` is derived per
//! read from the assignment ledger, never stored.

use super::{RepoError, RepoResult};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use shared::geometry::PolygonGeometry;
use shared::models::{Zone, ZoneCreate, ZoneUpdate};
use sqlx::SqlitePool;

const SELECT_COLS: &str = "id, name, description, boundary, created_at, \
     EXISTS(SELECT 1 FROM zone_assignment a WHERE a.zone_id = zone.id) AS assigned";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Zone>> {
    // Insertion order: ids are assigned by the store in creation order.
    let zones = sqlx::query_as::<_, Zone>(&format!("SELECT {SELECT_COLS} FROM zone ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(zones)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Zone>> {
    let zone = sqlx::query_as::<_, Zone>(&format!("SELECT {SELECT_COLS} FROM zone WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(zone)
}

pub async fn create(pool: &SqlitePool, data: ZoneCreate) -> RepoResult<Zone> {
    validate_fields(&data.name, &data.description)?;
    let boundary = PolygonGeometry::validate(data.boundary)?;

    let now = shared::util::now_millis();
    let boundary_json = encode_boundary(&boundary)?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO zone (name, description, boundary, created_at) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(data.name.trim())
    .bind(data.description.trim())
    .bind(boundary_json)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create zone".into()))
}

/// Full replace of the mutable fields, same validation as create.
pub async fn update(pool: &SqlitePool, id: i64, data: ZoneUpdate) -> RepoResult<Zone> {
    validate_fields(&data.name, &data.description)?;
    let boundary = PolygonGeometry::validate(data.boundary)?;
    let boundary_json = encode_boundary(&boundary)?;

    let rows = sqlx::query("UPDATE zone SET name = ?1, description = ?2, boundary = ?3 WHERE id = ?4")
        .bind(data.name.trim())
        .bind(data.description.trim())
        .bind(boundary_json)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Zone {id}")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Zone {id}")))
}

/// Hard delete, unconditional.
///
/// Assignment edges and client bindings are left untouched; ledger and
/// view reads tolerate the dangling references.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM zone WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

fn validate_fields(name: &str, description: &str) -> RepoResult<()> {
    validate_required_text(name, "nombre_zona_trabajo", MAX_NAME_LEN)?;
    validate_required_text(description, "descripcion", MAX_NOTE_LEN)?;
    Ok(())
}

fn encode_boundary(boundary: &PolygonGeometry) -> RepoResult<String> {
    serde_json::to_string(boundary.vertices())
        .map_err(|e| RepoError::Database(format!("Failed to encode boundary: {e}")))
}
