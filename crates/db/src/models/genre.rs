//! Genre entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlog_core::types::{DbId, Timestamp};

/// A row from the `genres` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub source_url: String,
    pub slug: String,
    pub create_by: DbId,
    pub create_date: Timestamp,
    pub modify_by: DbId,
    pub modify_date: Timestamp,
}

/// Enriched read representation for the genre detail endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GenreDetail {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub source_url: String,
    pub slug: String,
    pub create_by: String,
    pub create_date: Timestamp,
}

/// DTO for creating a new genre.
#[derive(Debug, Deserialize)]
pub struct CreateGenre {
    pub name: String,
    pub description: Option<String>,
    pub source_url: Option<String>,
}

/// DTO for updating a genre. The slug is never regenerated.
#[derive(Debug, Deserialize)]
pub struct UpdateGenre {
    pub name: Option<String>,
    pub description: Option<String>,
    pub source_url: Option<String>,
}
