//! Repository for the `reviews` table and its derived queries.

use sqlx::PgPool;
use waxlog_core::review::RELATED_REVIEW_LIMIT;
use waxlog_core::slug::review_slug;
use waxlog_core::types::DbId;

use crate::models::review::{CreateReview, Review, ReviewItem, UpdateReview};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, record_id, review_text, score, like_count, hidden, slug, \
    create_by, create_date, modify_by, modify_date";

/// Provides CRUD operations and derived queries for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review by `author` for a record. The slug is derived
    /// from a prefix of the review text, once.
    pub async fn create(
        pool: &PgPool,
        author: DbId,
        record_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (record_id, review_text, score, slug, create_by, modify_by)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(record_id)
            .bind(&input.review_text)
            .bind(input.score)
            .bind(review_slug(&input.review_text))
            .bind(author)
            .fetch_one(pool)
            .await
    }

    /// Find a review by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A user's own review of a record, if any. At most one is expected per
    /// (user, record); the most recently modified wins if data predates that
    /// rule.
    pub async fn find_by_user_and_record(
        pool: &PgPool,
        user_id: DbId,
        record_id: DbId,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE create_by = $1 AND record_id = $2
             ORDER BY modify_date DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .bind(record_id)
            .fetch_optional(pool)
            .await
    }

    /// Up to 10 most-recently-modified visible reviews of a record.
    ///
    /// When `exclude_user` is set (an authenticated viewer), that user's own
    /// review is filtered out; anonymous viewers see all reviews.
    pub async fn list_recent_for_record(
        pool: &PgPool,
        record_id: DbId,
        exclude_user: Option<DbId>,
    ) -> Result<Vec<ReviewItem>, sqlx::Error> {
        sqlx::query_as::<_, ReviewItem>(
            "SELECT v.id, v.record_id, v.review_text, v.score, v.like_count,
                    u.username AS author, v.modify_date
             FROM reviews v
             JOIN users u ON u.id = v.create_by
             WHERE v.record_id = $1
               AND NOT v.hidden
               AND ($2::BIGINT IS NULL OR v.create_by <> $2)
             ORDER BY v.modify_date DESC
             LIMIT $3",
        )
        .bind(record_id)
        .bind(exclude_user)
        .bind(RELATED_REVIEW_LIMIT)
        .fetch_all(pool)
        .await
    }

    /// All reviews written by a user, most recently modified first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE create_by = $1
             ORDER BY modify_date DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mean review score of a record, or `None` when it has no reviews.
    pub async fn average_score(
        pool: &PgPool,
        record_id: DbId,
    ) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(score)::FLOAT8 FROM reviews WHERE record_id = $1",
        )
        .bind(record_id)
        .fetch_one(pool)
        .await
    }

    /// Update a review's text and/or score. The slug is left untouched even
    /// when the text changes.
    pub async fn update(
        pool: &PgPool,
        actor: DbId,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET
                review_text = COALESCE($3, review_text),
                score = COALESCE($4, score),
                modify_by = $2,
                modify_date = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(actor)
            .bind(&input.review_text)
            .bind(input.score)
            .fetch_optional(pool)
            .await
    }

    /// Increment a review's like counter. Returns the updated row.
    pub async fn increment_like(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET like_count = like_count + 1
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
