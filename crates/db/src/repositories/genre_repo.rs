//! Repository for the `genres` table.

use sqlx::PgPool;
use waxlog_core::slug::slugify;
use waxlog_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre, GenreDetail, UpdateGenre};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, source_url, slug, create_by, create_date, modify_by, modify_date";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(
        pool: &PgPool,
        actor: DbId,
        input: &CreateGenre,
    ) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (name, description, source_url, slug, create_by, modify_by)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.source_url)
            .bind(slugify(&input.name))
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by slug. Slugs are not unique, so the oldest match wins.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE slug = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Detail representation with the creator's username resolved.
    pub async fn detail_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<GenreDetail>, sqlx::Error> {
        sqlx::query_as::<_, GenreDetail>(
            "SELECT g.id, g.name, g.description, g.source_url, g.slug,
                    u.username AS create_by, g.create_date
             FROM genres g
             JOIN users u ON u.id = g.create_by
             WHERE g.slug = $1
             ORDER BY g.id
             LIMIT 1",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
    }

    /// List all genres in default name-ascending order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Total number of genres, for pagination.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(pool)
            .await
    }

    /// One page of genres in default order.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM genres ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Genres associated with a record, name ascending.
    pub async fn list_by_record(
        pool: &PgPool,
        record_id: DbId,
    ) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.name, g.description, g.source_url, g.slug,
                    g.create_by, g.create_date, g.modify_by, g.modify_date
             FROM genres g
             JOIN record_genres rg ON rg.genre_id = g.id
             WHERE rg.record_id = $1
             ORDER BY g.name ASC",
        )
        .bind(record_id)
        .fetch_all(pool)
        .await
    }

    /// Update a genre by slug. The slug and create audit fields are left
    /// untouched.
    pub async fn update_by_slug(
        pool: &PgPool,
        actor: DbId,
        slug: &str,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!(
            "UPDATE genres SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                source_url = COALESCE($5, source_url),
                modify_by = $2,
                modify_date = NOW()
             WHERE id = (SELECT id FROM genres WHERE slug = $1 ORDER BY id LIMIT 1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(slug)
            .bind(actor)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.source_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre by slug. Returns `true` if a row was removed.
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM genres
             WHERE id = (SELECT id FROM genres WHERE slug = $1 ORDER BY id LIMIT 1)",
        )
        .bind(slug)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
