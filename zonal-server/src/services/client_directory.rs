//! Client directory interface
//!
//! Client registration lives in another system; this core only asks it
//! "which clients are bound to zone Z". The trait keeps the directory
//! behind a seam so tests can substitute an in-memory one.

use async_trait::async_trait;
use shared::error::{ApiError, ApiResult};
use shared::models::Client;

/// Read-only view over the external client records
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Clients bound to the given zone (by `zone_id` equality).
    async fn clients_of_zone(&self, zone_id: i64) -> ApiResult<Vec<Client>>;
}

/// HTTP-backed client directory
///
/// Wraps the REST endpoint the dashboard's client screens already use.
/// Transport failures surface as `Network` errors; the caller may retry
/// manually, nothing is retried here.
pub struct HttpClientDirectory {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClientDirectory {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ClientDirectory for HttpClientDirectory {
    async fn clients_of_zone(&self, zone_id: i64) -> ApiResult<Vec<Client>> {
        let url = format!("{}/api/clients?zone_id={}", self.base_url, zone_id);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Client directory unreachable: {e}")))?;

        if !resp.status().is_success() {
            return Err(ApiError::network(format!(
                "Client directory returned {}",
                resp.status()
            )));
        }

        let clients: Vec<Client> = resp
            .json()
            .await
            .map_err(|e| ApiError::network(format!("Invalid client directory response: {e}")))?;

        Ok(clients)
    }
}
