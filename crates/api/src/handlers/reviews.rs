//! Review handlers.
//!
//! A user may review a record at most once. Edits and deletes are gated on
//! authorship: anyone else gets a 403 regardless of how they obtained the id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use waxlog_core::error::CoreError;
use waxlog_core::review::{validate_review_text, validate_score};
use waxlog_core::types::DbId;
use waxlog_db::models::review::{CreateReview, Review, UpdateReview};
use waxlog_db::repositories::{RecordRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/records/{slug}/reviews
///
/// Create the authenticated user's review of a record. Scores run 0 to 5
/// inclusive. A second review of the same record is rejected with 409.
pub async fn create_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    validate_score(input.score).map_err(AppError::Core)?;
    validate_review_text(&input.review_text).map_err(AppError::Core)?;

    let record = RecordRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Record", &slug)))?;

    if ReviewRepo::find_by_user_and_record(&state.pool, auth.user_id, record.id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already reviewed this record".into(),
        )));
    }

    let review = ReviewRepo::create(&state.pool, auth.user_id, record.id, &input).await?;

    tracing::info!(
        review_id = review.id,
        record_id = record.id,
        user_id = auth.user_id,
        "Review created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// PUT /api/v1/reviews/{id}
///
/// Edit the authenticated user's own review. The review slug keeps its
/// original value even when the text changes.
pub async fn update_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<impl IntoResponse> {
    if let Some(score) = input.score {
        validate_score(score).map_err(AppError::Core)?;
    }
    if let Some(text) = &input.review_text {
        validate_review_text(text).map_err(AppError::Core)?;
    }

    let existing = require_own_review(&state, &auth, id).await?;

    let review = ReviewRepo::update(&state.pool, auth.user_id, existing.id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Review", id)))?;

    tracing::info!(review_id = review.id, user_id = auth.user_id, "Review updated");

    Ok(Json(DataResponse { data: review }))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = require_own_review(&state, &auth, id).await?;

    let deleted = ReviewRepo::delete(&state.pool, existing.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Review", id)));
    }

    tracing::info!(review_id = id, user_id = auth.user_id, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/reviews/{id}/like
///
/// Increment a review's like counter. Any authenticated user may like any
/// review, including their own; likes are not deduplicated.
pub async fn like_review(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::increment_like(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Review", id)))?;

    Ok(Json(DataResponse { data: review }))
}

/// Load a review and reject with 403 unless the caller wrote it.
async fn require_own_review(
    state: &AppState,
    auth: &AuthUser,
    id: DbId,
) -> Result<Review, AppError> {
    let review = ReviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Review", id)))?;

    if review.create_by != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only modify your own reviews".into(),
        )));
    }

    Ok(review)
}
