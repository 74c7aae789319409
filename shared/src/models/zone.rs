//! Zone Model

use serde::{Deserialize, Serialize};

use crate::geometry::GeoPoint;

/// Zone entity (zona de trabajo).
///
/// The wire names (`nombre_zona_trabajo`, `descripcion`, `coordenadas`)
/// are kept as the dashboard and map renderer expect them; `coordenadas`
/// always serializes as an array of `{lat, lng}` point objects.
///
/// `assigned` is derived per read from the assignment ledger and is
/// never stored on the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    #[serde(rename = "nombre_zona_trabajo")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "coordenadas")]
    pub boundary: Vec<GeoPoint>,
    pub created_at: i64,
    #[serde(default)]
    pub assigned: bool,
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCreate {
    #[serde(rename = "nombre_zona_trabajo")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "coordenadas")]
    pub boundary: Vec<GeoPoint>,
}

/// Update zone payload (full replace of the mutable fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneUpdate {
    #[serde(rename = "nombre_zona_trabajo")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "coordenadas")]
    pub boundary: Vec<GeoPoint>,
}

// The `boundary` column holds the vertex list as a JSON array, so the
// row type decodes it by hand instead of deriving `FromRow`.
#[cfg(feature = "db")]
impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for Zone {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let raw: String = row.try_get("boundary")?;
        let boundary: Vec<GeoPoint> =
            serde_json::from_str(&raw).map_err(|e| sqlx::Error::ColumnDecode {
                index: "boundary".into(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            boundary,
            created_at: row.try_get("created_at")?,
            assigned: row.try_get("assigned")?,
        })
    }
}
