//! Record (album) entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlog_core::types::{DbId, Timestamp};

/// A row from the `records` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Record {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
    pub label_id: DbId,
    pub slug: String,
    pub create_by: DbId,
    pub create_date: Timestamp,
    pub modify_by: DbId,
    pub modify_date: Timestamp,
}

/// List representation: the record plus its label name and comma-joined
/// band and genre names, aggregated in a single query.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecordSummary {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
    pub slug: String,
    pub label_name: String,
    pub band_names: String,
    pub genre_names: String,
}

/// DTO for creating a new record with its band and genre associations.
#[derive(Debug, Deserialize)]
pub struct CreateRecord {
    pub title: String,
    pub release_date: NaiveDate,
    pub label_id: DbId,
    #[serde(default)]
    pub band_ids: Vec<DbId>,
    #[serde(default)]
    pub genre_ids: Vec<DbId>,
}

/// DTO for updating a record. `band_ids` / `genre_ids`, when present,
/// replace the association sets wholesale. The slug is never regenerated.
#[derive(Debug, Deserialize)]
pub struct UpdateRecord {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub label_id: Option<DbId>,
    pub band_ids: Option<Vec<DbId>>,
    pub genre_ids: Option<Vec<DbId>>,
}
