//! Repository for the `bands` table.

use sqlx::PgPool;
use waxlog_core::slug::slugify;
use waxlog_core::types::DbId;

use crate::models::band::{Band, BandDetail, CreateBand, UpdateBand};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, origin, slug, create_by, create_date, modify_by, modify_date";

/// Provides CRUD operations for bands.
pub struct BandRepo;

impl BandRepo {
    /// Insert a new band, returning the created row.
    ///
    /// The slug is derived from the name here, once; later renames do not
    /// regenerate it.
    pub async fn create(pool: &PgPool, actor: DbId, input: &CreateBand) -> Result<Band, sqlx::Error> {
        let query = format!(
            "INSERT INTO bands (name, origin, slug, create_by, modify_by)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Band>(&query)
            .bind(&input.name)
            .bind(&input.origin)
            .bind(slugify(&input.name))
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a band by slug. Slugs are not unique, so the oldest match wins.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Band>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bands WHERE slug = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Band>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Detail representation: creator username plus the band's record titles
    /// comma-joined, newest release first.
    pub async fn detail_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BandDetail>, sqlx::Error> {
        sqlx::query_as::<_, BandDetail>(
            "SELECT b.id, b.name, b.origin, b.slug,
                    u.username AS create_by, b.create_date,
                    COALESCE(string_agg(r.title, ', ' ORDER BY r.release_date DESC), '')
                        AS record_list
             FROM bands b
             JOIN users u ON u.id = b.create_by
             LEFT JOIN record_bands rb ON rb.band_id = b.id
             LEFT JOIN records r ON r.id = rb.record_id
             WHERE b.slug = $1
             GROUP BY b.id, u.username
             ORDER BY b.id
             LIMIT 1",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
    }

    /// List all bands in default name-ascending order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Band>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bands ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Band>(&query).fetch_all(pool).await
    }

    /// Total number of bands, for pagination.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bands")
            .fetch_one(pool)
            .await
    }

    /// One page of bands in default order.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Band>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bands ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Band>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Bands associated with a record, name ascending.
    pub async fn list_by_record(
        pool: &PgPool,
        record_id: DbId,
    ) -> Result<Vec<Band>, sqlx::Error> {
        sqlx::query_as::<_, Band>(
            "SELECT b.id, b.name, b.origin, b.slug,
                    b.create_by, b.create_date, b.modify_by, b.modify_date
             FROM bands b
             JOIN record_bands rb ON rb.band_id = b.id
             WHERE rb.record_id = $1
             ORDER BY b.name ASC",
        )
        .bind(record_id)
        .fetch_all(pool)
        .await
    }

    /// Update a band by slug. Only non-`None` fields are applied; the slug
    /// and create audit fields are left untouched.
    ///
    /// Returns `None` if no band with the given slug exists.
    pub async fn update_by_slug(
        pool: &PgPool,
        actor: DbId,
        slug: &str,
        input: &UpdateBand,
    ) -> Result<Option<Band>, sqlx::Error> {
        let query = format!(
            "UPDATE bands SET
                name = COALESCE($3, name),
                origin = COALESCE($4, origin),
                modify_by = $2,
                modify_date = NOW()
             WHERE id = (SELECT id FROM bands WHERE slug = $1 ORDER BY id LIMIT 1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Band>(&query)
            .bind(slug)
            .bind(actor)
            .bind(&input.name)
            .bind(&input.origin)
            .fetch_optional(pool)
            .await
    }

    /// Delete a band by slug. Returns `true` if a row was removed.
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM bands
             WHERE id = (SELECT id FROM bands WHERE slug = $1 ORDER BY id LIMIT 1)",
        )
        .bind(slug)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
