//! Assignment Ledger
//!
//! Owns the collaborator↔zone relation. Edges reference zones and
//! collaborators by id only; unknown ids are accepted as no-ops because
//! upstream screens only pass ids obtained from a prior listing.

use super::RepoResult;
use sqlx::SqlitePool;

/// Link every listed zone to the collaborator.
///
/// Already-linked ids are skipped (`INSERT OR IGNORE` on the edge
/// primary key), so repeating a batch is harmless.
pub async fn assign_many(
    pool: &SqlitePool,
    collaborator_id: i64,
    zone_ids: &[i64],
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;
    for zone_id in zone_ids {
        sqlx::query(
            "INSERT OR IGNORE INTO zone_assignment (collaborator_id, zone_id, created_at) VALUES (?1, ?2, ?3)",
        )
        .bind(collaborator_id)
        .bind(zone_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(())
}

/// Remove a single edge; no-op if absent.
pub async fn unassign_one(pool: &SqlitePool, collaborator_id: i64, zone_id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM zone_assignment WHERE collaborator_id = ?1 AND zone_id = ?2")
        .bind(collaborator_id)
        .bind(zone_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove every edge for the collaborator.
pub async fn unassign_all(pool: &SqlitePool, collaborator_id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM zone_assignment WHERE collaborator_id = ?")
        .bind(collaborator_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Edge zone ids for a collaborator, in assignment order.
///
/// Zone deletion does not cascade into the ledger, so edges can point
/// at zones that no longer exist; reads treat those as "zone no longer
/// exists" and drop them via the join instead of erroring.
pub async fn zones_of(pool: &SqlitePool, collaborator_id: i64) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT a.zone_id FROM zone_assignment a \
         JOIN zone z ON z.id = a.zone_id \
         WHERE a.collaborator_id = ? \
         ORDER BY a.created_at, a.zone_id",
    )
    .bind(collaborator_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// True iff at least one collaborator has this zone.
///
/// Dangling edges do not count: a deleted zone is unassigned even if
/// its edges are still in the table.
pub async fn is_assigned(pool: &SqlitePool, zone_id: i64) -> RepoResult<bool> {
    let assigned = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM zone_assignment a \
                       JOIN zone z ON z.id = a.zone_id \
                       WHERE a.zone_id = ?)",
    )
    .bind(zone_id)
    .fetch_one(pool)
    .await?;
    Ok(assigned)
}
