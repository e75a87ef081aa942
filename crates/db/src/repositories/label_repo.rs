//! Repository for the `labels` table.

use sqlx::PgPool;
use waxlog_core::slug::slugify;
use waxlog_core::types::DbId;

use crate::models::label::{CreateLabel, Label, LabelDetail, UpdateLabel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, city, country, website, slug, create_by, create_date, modify_by, modify_date";

/// Provides CRUD operations for labels.
pub struct LabelRepo;

impl LabelRepo {
    /// Insert a new label, returning the created row.
    pub async fn create(
        pool: &PgPool,
        actor: DbId,
        input: &CreateLabel,
    ) -> Result<Label, sqlx::Error> {
        let query = format!(
            "INSERT INTO labels (name, city, country, website, slug, create_by, modify_by)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Label>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.country)
            .bind(&input.website)
            .bind(slugify(&input.name))
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a label by slug. Slugs are not unique, so the oldest match wins.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Label>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labels WHERE slug = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Label>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a label by internal id (used when composing record details).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Label>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labels WHERE id = $1");
        sqlx::query_as::<_, Label>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Detail representation with the creator's username resolved.
    pub async fn detail_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<LabelDetail>, sqlx::Error> {
        sqlx::query_as::<_, LabelDetail>(
            "SELECT l.id, l.name, l.city, l.country, l.website, l.slug,
                    u.username AS create_by, l.create_date
             FROM labels l
             JOIN users u ON u.id = l.create_by
             WHERE l.slug = $1
             ORDER BY l.id
             LIMIT 1",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
    }

    /// List all labels in default name-ascending order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Label>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labels ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Label>(&query).fetch_all(pool).await
    }

    /// Total number of labels, for pagination.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM labels")
            .fetch_one(pool)
            .await
    }

    /// One page of labels in default order.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Label>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM labels ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Label>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a label by slug. The slug and create audit fields are left
    /// untouched.
    pub async fn update_by_slug(
        pool: &PgPool,
        actor: DbId,
        slug: &str,
        input: &UpdateLabel,
    ) -> Result<Option<Label>, sqlx::Error> {
        let query = format!(
            "UPDATE labels SET
                name = COALESCE($3, name),
                city = COALESCE($4, city),
                country = COALESCE($5, country),
                website = COALESCE($6, website),
                modify_by = $2,
                modify_date = NOW()
             WHERE id = (SELECT id FROM labels WHERE slug = $1 ORDER BY id LIMIT 1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Label>(&query)
            .bind(slug)
            .bind(actor)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.country)
            .bind(&input.website)
            .fetch_optional(pool)
            .await
    }

    /// Delete a label by slug. Cascades to its records. Returns `true` if a
    /// row was removed.
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM labels
             WHERE id = (SELECT id FROM labels WHERE slug = $1 ORDER BY id LIMIT 1)",
        )
        .bind(slug)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
