//! Repository for the `tracks` table.

use sqlx::PgPool;
use waxlog_core::slug::slugify;
use waxlog_core::types::DbId;

use crate::models::track::{CreateTrack, Track, UpdateTrack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, record_id, name, number, duration_secs, slug, \
    create_by, create_date, modify_by, modify_date";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track on a record, with optional featured bands,
    /// atomically.
    pub async fn create(
        pool: &PgPool,
        actor: DbId,
        record_id: DbId,
        input: &CreateTrack,
    ) -> Result<Track, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO tracks (record_id, name, number, duration_secs, slug,
                                 create_by, modify_by)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {COLUMNS}"
        );
        let track = sqlx::query_as::<_, Track>(&query)
            .bind(record_id)
            .bind(&input.name)
            .bind(input.number)
            .bind(input.duration_secs)
            .bind(slugify(&input.name))
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        for band_id in &input.band_ids {
            sqlx::query(
                "INSERT INTO track_bands (track_id, band_id)
                 VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(track.id)
            .bind(band_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(track)
    }

    /// Find a track by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All tracks on a record, in default track-number-ascending order.
    pub async fn list_by_record(
        pool: &PgPool,
        record_id: DbId,
    ) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks WHERE record_id = $1 ORDER BY number ASC, id ASC"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(record_id)
            .fetch_all(pool)
            .await
    }

    /// Update a track. The slug is left untouched.
    pub async fn update(
        pool: &PgPool,
        actor: DbId,
        id: DbId,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET
                name = COALESCE($3, name),
                number = COALESCE($4, number),
                duration_secs = COALESCE($5, duration_secs),
                modify_by = $2,
                modify_date = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(actor)
            .bind(&input.name)
            .bind(input.number)
            .bind(input.duration_secs)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
