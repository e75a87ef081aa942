//! Repository for the `owned_records` table (user collections).

use sqlx::PgPool;
use waxlog_core::types::DbId;

use crate::models::owned_record::{CreateOwnedRecord, OwnedRecord, OwnedRecordItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, record_id, purchase_date, disc_type";

/// Joined listing select shared by the two user-facing list queries.
const ITEM_SELECT: &str = "SELECT o.id, o.record_id, r.title AS record_title,
        r.slug AS record_slug, o.purchase_date, o.disc_type
     FROM owned_records o
     JOIN records r ON r.id = o.record_id";

/// Provides CRUD operations for owned records.
pub struct OwnedRecordRepo;

impl OwnedRecordRepo {
    /// Insert a collection entry for a user. A missing purchase date
    /// defaults to today.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateOwnedRecord,
    ) -> Result<OwnedRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO owned_records (user_id, record_id, purchase_date, disc_type)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OwnedRecord>(&query)
            .bind(user_id)
            .bind(input.record_id)
            .bind(input.purchase_date)
            .bind(&input.disc_type)
            .fetch_one(pool)
            .await
    }

    /// Find a collection entry by id (for the ownership check on delete).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OwnedRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owned_records WHERE id = $1");
        sqlx::query_as::<_, OwnedRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All of a user's collection entries, most recent purchase first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<OwnedRecordItem>, sqlx::Error> {
        let query = format!(
            "{ITEM_SELECT}
             WHERE o.user_id = $1
             ORDER BY o.purchase_date DESC, o.id DESC"
        );
        sqlx::query_as::<_, OwnedRecordItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// A user's recently acquired entries: purchase date at or before today,
    /// most recent first. Future-dated purchases are excluded.
    pub async fn list_recent_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<OwnedRecordItem>, sqlx::Error> {
        let query = format!(
            "{ITEM_SELECT}
             WHERE o.user_id = $1 AND o.purchase_date <= CURRENT_DATE
             ORDER BY o.purchase_date DESC, o.id DESC"
        );
        sqlx::query_as::<_, OwnedRecordItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a collection entry by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owned_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
