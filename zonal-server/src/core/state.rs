use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::services::{ClientDirectory, HttpClientDirectory};

/// Server state - shared handles for every service
///
/// Cloned into each handler by axum; all members are cheap to clone
/// (`Arc` or pool handles).
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | pool | SqlitePool | embedded database |
/// | client_directory | Arc<dyn ClientDirectory> | external client records |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// External client directory
    pub client_directory: Arc<dyn ClientDirectory>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("pool", &"<SqlitePool>")
            .field("client_directory", &"<dyn ClientDirectory>")
            .finish()
    }
}

impl ServerState {
    /// Create server state from already-built parts (used by tests)
    pub fn new(
        config: Config,
        pool: SqlitePool,
        client_directory: Arc<dyn ClientDirectory>,
    ) -> Self {
        Self {
            config,
            pool,
            client_directory,
        }
    }

    /// Initialize the server state
    ///
    /// Order:
    /// 1. working directory structure
    /// 2. database (work_dir/database/zonal.db) + migrations
    /// 3. client directory HTTP service
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("zonal.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let client_directory: Arc<dyn ClientDirectory> =
            Arc::new(HttpClientDirectory::new(config.client_directory_url.clone()));

        Ok(Self::new(config.clone(), db_service.pool, client_directory))
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the client directory
    pub fn client_directory(&self) -> Arc<dyn ClientDirectory> {
        self.client_directory.clone()
    }
}
