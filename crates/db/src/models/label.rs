//! Label entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlog_core::types::{DbId, Timestamp};

/// A row from the `labels` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Label {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub website: String,
    pub slug: String,
    pub create_by: DbId,
    pub create_date: Timestamp,
    pub modify_by: DbId,
    pub modify_date: Timestamp,
}

/// Enriched read representation for the label detail endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LabelDetail {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub website: String,
    pub slug: String,
    pub create_by: String,
    pub create_date: Timestamp,
}

/// DTO for creating a new label.
#[derive(Debug, Deserialize)]
pub struct CreateLabel {
    pub name: String,
    pub city: String,
    pub country: String,
    pub website: Option<String>,
}

/// DTO for updating a label. The slug is never regenerated.
#[derive(Debug, Deserialize)]
pub struct UpdateLabel {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
}
