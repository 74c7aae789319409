//! Collaborator assignment API module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/collaborators", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/{id}/zones",
            get(handler::list_zone_ids)
                .post(handler::assign)
                .delete(handler::unassign_all),
        )
        .route("/{id}/zones/{zone_id}", delete(handler::unassign_one))
        .route("/{id}/territory", get(handler::territory))
}
