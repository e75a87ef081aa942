//! Band entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlog_core::types::{DbId, Timestamp};

/// A row from the `bands` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Band {
    pub id: DbId,
    pub name: String,
    pub origin: String,
    pub slug: String,
    pub create_by: DbId,
    pub create_date: Timestamp,
    pub modify_by: DbId,
    pub modify_date: Timestamp,
}

/// Enriched read representation for the band detail endpoint: the creator's
/// username and the band's record titles joined with commas, newest first.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BandDetail {
    pub id: DbId,
    pub name: String,
    pub origin: String,
    pub slug: String,
    pub create_by: String,
    pub create_date: Timestamp,
    pub record_list: String,
}

/// DTO for creating a new band.
#[derive(Debug, Deserialize)]
pub struct CreateBand {
    pub name: String,
    pub origin: String,
}

/// DTO for updating a band. Only non-`None` fields are applied; the slug is
/// never regenerated.
#[derive(Debug, Deserialize)]
pub struct UpdateBand {
    pub name: Option<String>,
    pub origin: Option<String>,
}
