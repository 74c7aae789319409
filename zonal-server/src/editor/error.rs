use crate::db::repository::RepoError;
use shared::geometry::GeometryError;
use thiserror::Error;

/// Editor session errors
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Cannot {action} while the editor is {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("Invalid boundary: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Save failed: {0}")]
    Save(#[from] RepoError),
}

pub type EditorResult<T> = Result<T, EditorError>;
