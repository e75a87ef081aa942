//! Owned record (user collection entry) model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlog_core::types::DbId;

/// A row from the `owned_records` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OwnedRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub record_id: DbId,
    pub purchase_date: NaiveDate,
    pub disc_type: String,
}

/// Collection listing representation: the entry joined with its record title
/// and slug.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OwnedRecordItem {
    pub id: DbId,
    pub record_id: DbId,
    pub record_title: String,
    pub record_slug: String,
    pub purchase_date: NaiveDate,
    pub disc_type: String,
}

/// DTO for adding a record to the caller's collection. A missing purchase
/// date defaults to today (database default).
#[derive(Debug, Deserialize)]
pub struct CreateOwnedRecord {
    pub record_id: DbId,
    pub purchase_date: Option<NaiveDate>,
    pub disc_type: String,
}
