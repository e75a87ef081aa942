//! Review entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waxlog_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub id: DbId,
    pub record_id: DbId,
    pub review_text: String,
    pub score: i32,
    pub like_count: i32,
    pub hidden: bool,
    pub slug: String,
    pub create_by: DbId,
    pub create_date: Timestamp,
    pub modify_by: DbId,
    pub modify_date: Timestamp,
}

/// Listing representation: the review joined with its author's username.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewItem {
    pub id: DbId,
    pub record_id: DbId,
    pub review_text: String,
    pub score: i32,
    pub like_count: i32,
    pub author: String,
    pub modify_date: Timestamp,
}

/// DTO for submitting a review. Score validity (0-5) is checked in
/// application code before this reaches the repository.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub review_text: String,
    pub score: i32,
}

/// DTO for editing a review. The slug is never regenerated, even when the
/// review text changes.
#[derive(Debug, Deserialize)]
pub struct UpdateReview {
    pub review_text: Option<String>,
    pub score: Option<i32>,
}
