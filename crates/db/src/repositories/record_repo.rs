//! Repository for the `records` table and its band/genre associations.

use sqlx::{PgPool, Postgres, Transaction};
use waxlog_core::collection::RELATED_RECORD_LIMIT;
use waxlog_core::slug::slugify;
use waxlog_core::types::DbId;

use crate::models::record::{CreateRecord, Record, RecordSummary, UpdateRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, release_date, label_id, slug, create_by, create_date, modify_by, modify_date";

/// Aggregated list query shared by `list_page`: one row per record with the
/// label name and comma-joined band/genre names.
const SUMMARY_SELECT: &str = "SELECT r.id, r.title, r.release_date, r.slug,
        l.name AS label_name,
        COALESCE(string_agg(DISTINCT b.name, ', '), '') AS band_names,
        COALESCE(string_agg(DISTINCT g.name, ', '), '') AS genre_names
     FROM records r
     JOIN labels l ON l.id = r.label_id
     LEFT JOIN record_bands rb ON rb.record_id = r.id
     LEFT JOIN bands b ON b.id = rb.band_id
     LEFT JOIN record_genres rg ON rg.record_id = r.id
     LEFT JOIN genres g ON g.id = rg.genre_id
     GROUP BY r.id, l.name";

/// Provides CRUD operations and derived queries for records.
pub struct RecordRepo;

impl RecordRepo {
    /// Insert a new record together with its band and genre associations,
    /// atomically.
    pub async fn create(
        pool: &PgPool,
        actor: DbId,
        input: &CreateRecord,
    ) -> Result<Record, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO records (title, release_date, label_id, slug, create_by, modify_by)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, Record>(&query)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(input.label_id)
            .bind(slugify(&input.title))
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        set_bands(&mut tx, record.id, &input.band_ids).await?;
        set_genres(&mut tx, record.id, &input.genre_ids).await?;

        tx.commit().await?;
        Ok(record)
    }

    /// Find a record by slug. Slugs are not unique, so the oldest match wins.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE slug = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Record>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a record with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM records WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Total number of records, for pagination.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM records")
            .fetch_one(pool)
            .await
    }

    /// One page of record summaries in default release-date-descending order.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RecordSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT}
             ORDER BY r.release_date DESC, r.id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, RecordSummary>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Other records sharing at least one band with the given record,
    /// deduplicated, newest release first.
    pub async fn list_by_shared_bands(
        pool: &PgPool,
        record_id: DbId,
    ) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {COLUMNS} FROM (
                SELECT r2.* FROM records r2
                JOIN record_bands rb2 ON rb2.record_id = r2.id
                WHERE rb2.band_id IN
                    (SELECT band_id FROM record_bands WHERE record_id = $1)
                  AND r2.id <> $1
             ) shared
             ORDER BY release_date DESC, id DESC"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(record_id)
            .fetch_all(pool)
            .await
    }

    /// Up to 10 records released on a label, newest first.
    pub async fn list_by_label(pool: &PgPool, label_id: DbId) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM records
             WHERE label_id = $1
             ORDER BY release_date DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(label_id)
            .bind(RELATED_RECORD_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Up to 10 records tagged with a genre, newest first.
    pub async fn list_by_genre(pool: &PgPool, genre_id: DbId) -> Result<Vec<Record>, sqlx::Error> {
        sqlx::query_as::<_, Record>(
            "SELECT r.id, r.title, r.release_date, r.label_id, r.slug,
                    r.create_by, r.create_date, r.modify_by, r.modify_date
             FROM records r
             JOIN record_genres rg ON rg.record_id = r.id
             WHERE rg.genre_id = $1
             ORDER BY r.release_date DESC, r.id DESC
             LIMIT $2",
        )
        .bind(genre_id)
        .bind(RELATED_RECORD_LIMIT)
        .fetch_all(pool)
        .await
    }

    /// Update a record by slug. When `band_ids` / `genre_ids` are present the
    /// association sets are replaced wholesale. The slug is left untouched.
    ///
    /// Returns `None` if no record with the given slug exists.
    pub async fn update_by_slug(
        pool: &PgPool,
        actor: DbId,
        slug: &str,
        input: &UpdateRecord,
    ) -> Result<Option<Record>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE records SET
                title = COALESCE($3, title),
                release_date = COALESCE($4, release_date),
                label_id = COALESCE($5, label_id),
                modify_by = $2,
                modify_date = NOW()
             WHERE id = (SELECT id FROM records WHERE slug = $1 ORDER BY id LIMIT 1)
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, Record>(&query)
            .bind(slug)
            .bind(actor)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(input.label_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(record) = record else {
            tx.rollback().await?;
            return Ok(None);
        };

        if let Some(ref band_ids) = input.band_ids {
            sqlx::query("DELETE FROM record_bands WHERE record_id = $1")
                .bind(record.id)
                .execute(&mut *tx)
                .await?;
            set_bands(&mut tx, record.id, band_ids).await?;
        }
        if let Some(ref genre_ids) = input.genre_ids {
            sqlx::query("DELETE FROM record_genres WHERE record_id = $1")
                .bind(record.id)
                .execute(&mut *tx)
                .await?;
            set_genres(&mut tx, record.id, genre_ids).await?;
        }

        tx.commit().await?;
        Ok(Some(record))
    }

    /// Delete a record by slug. Cascades to its tracks, owned records, and
    /// reviews. Returns `true` if a row was removed.
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM records
             WHERE id = (SELECT id FROM records WHERE slug = $1 ORDER BY id LIMIT 1)",
        )
        .bind(slug)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn set_bands(
    tx: &mut Transaction<'_, Postgres>,
    record_id: DbId,
    band_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for band_id in band_ids {
        sqlx::query(
            "INSERT INTO record_bands (record_id, band_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(record_id)
        .bind(band_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn set_genres(
    tx: &mut Transaction<'_, Postgres>,
    record_id: DbId,
    genre_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for genre_id in genre_ids {
        sqlx::query(
            "INSERT INTO record_genres (record_id, genre_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(record_id)
        .bind(genre_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
