//! Polygon geometry for zone boundaries
//!
//! A zone boundary arrives from the map widget as an ordered list of
//! lat/lng vertices. [`PolygonGeometry::validate`] is the single point
//! where raw vertex lists are checked; everything downstream (store,
//! editor, wire format) only ever sees validated values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two vertices closer than this (degrees, per axis) count as the same point.
pub const COORD_EPSILON: f64 = 1e-9;

/// A single polygon vertex in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Coincidence test within [`COORD_EPSILON`] on both axes.
    pub fn coincides(&self, other: &GeoPoint) -> bool {
        (self.lat - other.lat).abs() < COORD_EPSILON
            && (self.lng - other.lng).abs() < COORD_EPSILON
    }
}

/// Boundary validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("A zone boundary needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("Consecutive duplicate vertex at position {index}")]
    DegenerateVertex { index: usize },
}

/// Validated zone boundary.
///
/// Immutable once constructed: editing a boundary always goes back
/// through [`PolygonGeometry::validate`] with a complete new vertex
/// list, matching the draw/edit/delete interaction model of the map
/// widget. Self-intersecting rings are not detected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PolygonGeometry {
    vertices: Vec<GeoPoint>,
}

impl PolygonGeometry {
    /// Validate a raw vertex list into a boundary.
    ///
    /// Rejects fewer than 3 vertices and consecutive duplicates
    /// (within [`COORD_EPSILON`]). The vertex order is preserved.
    pub fn validate(vertices: Vec<GeoPoint>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        for (index, pair) in vertices.windows(2).enumerate() {
            if pair[0].coincides(&pair[1]) {
                return Err(GeometryError::DegenerateVertex { index: index + 1 });
            }
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<GeoPoint> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
