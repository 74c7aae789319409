//! ZoneEditorSession - interactive zone creation and editing
//!
//! One operator edits one zone's geometry at a time. The session is an
//! explicit state machine; every user action is a transition, and
//! illegal ones (saving with no boundary, editing a committed zone
//! without reopening it) are rejected instead of silently ignored.
//!
//! # Session Flow
//!
//! ```text
//! Empty ──draw──▶ Drawn ──edit_vertices──▶ Editing
//!   ▲               │  ▲                      │
//!   │        delete_shape (also from Editing) │
//!   └───────────────┘  └──────────────────────┘
//!                    │
//!                  save ──▶ Committing ──▶ Saved ──edit──▶ Drawn
//!                              │ (on failure: back to Drawn/Editing
//!                              ▼  with the error surfaced)
//! ```
//!
//! The map widget holds at most one editable shape per session, so a
//! new draw while a candidate exists replaces it. A rejected edit (for
//! example dragging the boundary down to fewer than 3 vertices) keeps
//! the prior valid boundary. While a save is in flight the session sits
//! in `Committing` and refuses another save; there is no cancel.

mod error;
pub use error::*;


use sqlx::SqlitePool;

use crate::db::repository::zone;
use shared::geometry::{GeoPoint, PolygonGeometry};
use shared::models::{Zone, ZoneCreate, ZoneUpdate};

/// Editor session states
#[derive(Debug, Clone)]
pub enum EditorState {
    /// No candidate boundary yet; save is disabled.
    Empty,
    /// A draw action produced a validated candidate boundary.
    Drawn { boundary: PolygonGeometry },
    /// The candidate boundary has been reshaped at least once.
    Editing { boundary: PolygonGeometry },
    /// A save is in flight; further mutations are refused.
    Committing { boundary: PolygonGeometry },
    /// The zone is persisted; read-only until an explicit edit.
    Saved { zone: Zone },
}

impl EditorState {
    /// State name used in transition errors
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Drawn { .. } => "drawn",
            Self::Editing { .. } => "editing",
            Self::Committing { .. } => "committing",
            Self::Saved { .. } => "saved",
        }
    }
}

/// Interactive editor session for a single zone
///
/// A fresh session (`new`) commits through zone creation; a session
/// opened on an existing record (`open`) commits through a full-replace
/// update of that record.
#[derive(Debug)]
pub struct ZoneEditorSession {
    zone_id: Option<i64>,
    state: EditorState,
}

impl ZoneEditorSession {
    /// Start a session for a new zone
    pub fn new() -> Self {
        Self {
            zone_id: None,
            state: EditorState::Empty,
        }
    }

    /// Open a session on an already-persisted zone (read-only until `edit`)
    pub fn open(zone: Zone) -> Self {
        Self {
            zone_id: Some(zone.id),
            state: EditorState::Saved { zone },
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The candidate boundary, if the session holds one
    pub fn boundary(&self) -> Option<&PolygonGeometry> {
        match &self.state {
            EditorState::Drawn { boundary }
            | EditorState::Editing { boundary }
            | EditorState::Committing { boundary } => Some(boundary),
            EditorState::Empty | EditorState::Saved { .. } => None,
        }
    }

    /// Complete a draw action with the shape's full vertex list.
    ///
    /// Allowed from `Empty`, and from `Drawn`/`Editing` where the new
    /// shape replaces the current candidate. An invalid vertex list
    /// leaves the session untouched.
    pub fn draw(&mut self, vertices: Vec<GeoPoint>) -> EditorResult<()> {
        match self.state {
            EditorState::Empty | EditorState::Drawn { .. } | EditorState::Editing { .. } => {
                let boundary = PolygonGeometry::validate(vertices)?;
                self.state = EditorState::Drawn { boundary };
                Ok(())
            }
            ref other => Err(EditorError::InvalidTransition {
                from: other.name(),
                action: "draw",
            }),
        }
    }

    /// Apply a vertex drag/insert/remove as a complete new vertex list.
    ///
    /// A result that fails validation (e.g. fewer than 3 vertices) is
    /// rejected and the prior valid boundary is retained.
    pub fn edit_vertices(&mut self, vertices: Vec<GeoPoint>) -> EditorResult<()> {
        match self.state {
            EditorState::Drawn { .. } | EditorState::Editing { .. } => {
                let boundary = PolygonGeometry::validate(vertices)?;
                self.state = EditorState::Editing { boundary };
                Ok(())
            }
            ref other => Err(EditorError::InvalidTransition {
                from: other.name(),
                action: "edit vertices",
            }),
        }
    }

    /// Discard the candidate boundary.
    pub fn delete_shape(&mut self) -> EditorResult<()> {
        match self.state {
            EditorState::Drawn { .. } | EditorState::Editing { .. } => {
                self.state = EditorState::Empty;
                Ok(())
            }
            ref other => Err(EditorError::InvalidTransition {
                from: other.name(),
                action: "delete the shape",
            }),
        }
    }

    /// Re-enter editing on a saved zone, starting from its committed boundary.
    pub fn edit(&mut self) -> EditorResult<()> {
        match &self.state {
            EditorState::Saved { zone } => {
                // The stored boundary was validated on the way in.
                let boundary = PolygonGeometry::validate(zone.boundary.clone())?;
                self.state = EditorState::Drawn { boundary };
                Ok(())
            }
            other => Err(EditorError::InvalidTransition {
                from: other.name(),
                action: "edit",
            }),
        }
    }

    /// Commit the candidate boundary together with the form fields.
    ///
    /// Runs full validation (name, description, boundary) through the
    /// zone repository. On failure the session returns to its
    /// pre-commit state with the error surfaced; nothing is discarded.
    /// On success the session becomes read-only `Saved`.
    pub async fn save(
        &mut self,
        pool: &SqlitePool,
        name: &str,
        description: &str,
    ) -> EditorResult<Zone> {
        let (boundary, was_editing) = match std::mem::replace(&mut self.state, EditorState::Empty)
        {
            EditorState::Drawn { boundary } => (boundary, false),
            EditorState::Editing { boundary } => (boundary, true),
            other => {
                let from = other.name();
                self.state = other;
                return Err(EditorError::InvalidTransition {
                    from,
                    action: "save",
                });
            }
        };

        self.state = EditorState::Committing {
            boundary: boundary.clone(),
        };

        let result = match self.zone_id {
            Some(id) => {
                zone::update(
                    pool,
                    id,
                    ZoneUpdate {
                        name: name.to_string(),
                        description: description.to_string(),
                        boundary: boundary.vertices().to_vec(),
                    },
                )
                .await
            }
            None => {
                zone::create(
                    pool,
                    ZoneCreate {
                        name: name.to_string(),
                        description: description.to_string(),
                        boundary: boundary.vertices().to_vec(),
                    },
                )
                .await
            }
        };

        match result {
            Ok(zone) => {
                tracing::info!(zone_id = zone.id, "Zone committed from editor session");
                self.zone_id = Some(zone.id);
                self.state = EditorState::Saved { zone: zone.clone() };
                Ok(zone)
            }
            Err(err) => {
                self.state = if was_editing {
                    EditorState::Editing { boundary }
                } else {
                    EditorState::Drawn { boundary }
                };
                Err(err.into())
            }
        }
    }
}

impl Default for ZoneEditorSession {
    fn default() -> Self {
        Self::new()
    }
}
