//! Track entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlog_core::types::{DbId, Timestamp};

/// A row from the `tracks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Track {
    pub id: DbId,
    pub record_id: DbId,
    pub name: String,
    pub number: i32,
    pub duration_secs: i32,
    pub slug: String,
    pub create_by: DbId,
    pub create_date: Timestamp,
    pub modify_by: DbId,
    pub modify_date: Timestamp,
}

/// DTO for creating a new track on a record. `band_ids` lists optional
/// featured bands.
#[derive(Debug, Deserialize)]
pub struct CreateTrack {
    pub name: String,
    pub number: i32,
    pub duration_secs: i32,
    #[serde(default)]
    pub band_ids: Vec<DbId>,
}

/// DTO for updating a track. The slug is never regenerated.
#[derive(Debug, Deserialize)]
pub struct UpdateTrack {
    pub name: Option<String>,
    pub number: Option<i32>,
    pub duration_secs: Option<i32>,
}
