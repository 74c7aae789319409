//! HTTP API integration tests
//!
//! Drives the full router (middleware included) with in-process
//! requests; the wire format is the dashboard's Spanish field names.

mod common;

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{client, test_state};
use zonal_server::api;

async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn zona_norte_body() -> Value {
    json!({
        "nombre_zona_trabajo": "Zona Norte",
        "descripcion": "Barrios del norte",
        "coordenadas": [
            {"lat": 4.53, "lng": -75.68},
            {"lat": 4.54, "lng": -75.68},
            {"lat": 4.54, "lng": -75.67}
        ]
    })
}

#[tokio::test]
async fn zone_crud_over_http() {
    let (_dir, state) = test_state(vec![]).await;
    let app = api::build_app(state);

    // Create
    let (status, created) = send(app.clone(), post_json("/api/zones", zona_norte_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["nombre_zona_trabajo"], "Zona Norte");
    assert!(created["coordenadas"].is_array());
    assert_eq!(created["assigned"], false);
    let id = created["id"].as_i64().expect("zone id");

    // List
    let (status, listed) = send(app.clone(), get("/api/zones")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(|a| a.len()), Some(1));

    // Delete, then the record is gone
    let (status, _) = send(app.clone(), delete(&format!("/api/zones/{id}"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app.clone(), get(&format!("/api/zones/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn zone_create_rejects_empty_boundary() {
    let (_dir, state) = test_state(vec![]).await;
    let app = api::build_app(state);

    let mut body = zona_norte_body();
    body["coordenadas"] = json!([]);

    let (status, resp) = send(app.clone(), post_json("/api/zones", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["code"], "E0002");

    let (_, listed) = send(app, get("/api/zones")).await;
    assert_eq!(listed.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn assignment_flow_over_http() {
    let (_dir, state) = test_state(vec![]).await;
    let app = api::build_app(state);

    let (_, created) = send(app.clone(), post_json("/api/zones", zona_norte_body())).await;
    let id = created["id"].as_i64().expect("zone id");

    // Batch assign is idempotent
    for _ in 0..2 {
        let (status, ids) = send(
            app.clone(),
            post_json("/api/collaborators/7/zones", json!({"zone_ids": [id]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids, json!([id]));
    }

    // The derived flag flips on the listing
    let (_, listed) = send(app.clone(), get("/api/zones")).await;
    assert_eq!(listed[0]["assigned"], true);

    // Resolved territory view
    let (status, territory) = send(app.clone(), get("/api/collaborators/7/territory")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(territory[0]["id"], json!(id));

    // Remove one, then the ledger is empty
    let (status, _) = send(
        app.clone(),
        delete(&format!("/api/collaborators/7/zones/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, ids) = send(app, get("/api/collaborators/7/zones")).await;
    assert_eq!(ids, json!([]));
}

#[tokio::test]
async fn clients_of_zone_come_from_the_directory() {
    let (_dir, state) = test_state(vec![
        client(1, "Tienda La Esquina", 100),
        client(2, "Supermercado Real", 100),
        client(3, "Droguería Central", 200),
    ])
    .await;
    let app = api::build_app(state);

    let (status, clients) = send(app, get("/api/zones/100/clients")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(clients.as_array().map(|a| a.len()), Some(2));
    assert_eq!(clients[0]["name"], "Tienda La Esquina");
}

#[tokio::test]
async fn health_reports_database_state() {
    let (_dir, state) = test_state(vec![]).await;
    let app = api::build_app(state);

    let (status, body) = send(app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
