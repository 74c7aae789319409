//! Assignment ledger integration tests

mod common;

use std::collections::HashSet;

use common::{test_state, triangle};
use shared::models::ZoneCreate;
use zonal_server::db::repository::{assignment, zone};

async fn seed_zone(state: &zonal_server::ServerState, name: &str) -> i64 {
    zone::create(
        &state.pool,
        ZoneCreate {
            name: name.to_string(),
            description: "desc".to_string(),
            boundary: triangle(),
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn assign_many_is_an_idempotent_union() {
    let (_dir, state) = test_state(vec![]).await;
    let z1 = seed_zone(&state, "Zona Norte").await;
    let z2 = seed_zone(&state, "Zona Centro").await;
    let z3 = seed_zone(&state, "Zona Sur").await;

    assignment::assign_many(&state.pool, 7, &[z1, z2]).await.unwrap();
    assignment::assign_many(&state.pool, 7, &[z2, z3]).await.unwrap();

    let ids: HashSet<i64> = assignment::zones_of(&state.pool, 7)
        .await
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(ids, HashSet::from([z1, z2, z3]));
}

#[tokio::test]
async fn unassign_all_empties_the_collaborator() {
    let (_dir, state) = test_state(vec![]).await;
    let z1 = seed_zone(&state, "Zona Norte").await;
    let z2 = seed_zone(&state, "Zona Centro").await;

    assignment::assign_many(&state.pool, 7, &[z1, z2]).await.unwrap();
    assignment::assign_many(&state.pool, 8, &[z1]).await.unwrap();

    assignment::unassign_all(&state.pool, 7).await.unwrap();

    assert!(assignment::zones_of(&state.pool, 7).await.unwrap().is_empty());
    // Other collaborators keep their edges.
    assert_eq!(assignment::zones_of(&state.pool, 8).await.unwrap(), vec![z1]);
}

#[tokio::test]
async fn unassign_one_is_a_noop_when_absent() {
    let (_dir, state) = test_state(vec![]).await;
    let z1 = seed_zone(&state, "Zona Norte").await;

    // Nothing assigned yet: both calls are accepted.
    assignment::unassign_one(&state.pool, 7, z1).await.unwrap();
    assignment::unassign_one(&state.pool, 7, 424242).await.unwrap();

    assignment::assign_many(&state.pool, 7, &[z1]).await.unwrap();
    assignment::unassign_one(&state.pool, 7, z1).await.unwrap();
    assert!(assignment::zones_of(&state.pool, 7).await.unwrap().is_empty());
}

#[tokio::test]
async fn is_assigned_tracks_the_ledger() {
    let (_dir, state) = test_state(vec![]).await;
    let z1 = seed_zone(&state, "Zona Norte").await;

    assert!(!assignment::is_assigned(&state.pool, z1).await.unwrap());

    assignment::assign_many(&state.pool, 7, &[z1]).await.unwrap();
    assert!(assignment::is_assigned(&state.pool, z1).await.unwrap());
    assert!(assignment::zones_of(&state.pool, 7).await.unwrap().contains(&z1));

    // The derived flag on the record follows.
    let record = zone::find_by_id(&state.pool, z1).await.unwrap().unwrap();
    assert!(record.assigned);

    assignment::unassign_all(&state.pool, 7).await.unwrap();
    assert!(!assignment::is_assigned(&state.pool, z1).await.unwrap());
}

#[tokio::test]
async fn full_scenario_create_assign_query() {
    // Create "Zona Norte", assign it to collaborator 7, observe both
    // sides of the relation.
    let (_dir, state) = test_state(vec![]).await;

    let created = zone::create(
        &state.pool,
        ZoneCreate {
            name: "Zona Norte".to_string(),
            description: "desc".to_string(),
            boundary: triangle(),
        },
    )
    .await
    .unwrap();
    assert!(!created.assigned);

    assignment::assign_many(&state.pool, 7, &[created.id]).await.unwrap();

    assert!(assignment::zones_of(&state.pool, 7).await.unwrap().contains(&created.id));
    assert!(assignment::is_assigned(&state.pool, created.id).await.unwrap());
}
