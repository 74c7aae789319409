//! Zonal Server - sales-territory management backend
//!
//! # Architecture overview
//!
//! The server owns the zone records and the collaborator↔zone
//! assignment ledger, and projects client↔zone membership from an
//! external client directory:
//!
//! - **Database** (`db`): embedded SQLite storage and repositories
//! - **HTTP API** (`api`): RESTful routes for zones and assignments
//! - **Editor** (`editor`): the interactive zone-editing state machine
//! - **Views** (`views`): read-only membership projections
//! - **Services** (`services`): external client-directory interface
//!
//! # Module structure
//!
//! ```text
//! zonal-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer
//! ├── editor/        # zone editor session state machine
//! ├── views/         # read projections
//! ├── services/      # external collaborators
//! └── utils/         # logging, validation, error aliases
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod editor;
pub mod services;
pub mod utils;
pub mod views;

// Re-export public types
pub use self::core::{Config, Server, ServerState};
pub use editor::{EditorError, ZoneEditorSession};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
