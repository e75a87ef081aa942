//! Personal collection handlers.
//!
//! Collection entries record which pressing of a record a user owns and when
//! it was bought. All endpoints operate on the authenticated user's own
//! collection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use waxlog_core::collection::validate_disc_type;
use waxlog_core::error::CoreError;
use waxlog_core::types::DbId;
use waxlog_db::models::owned_record::CreateOwnedRecord;
use waxlog_db::repositories::{OwnedRecordRepo, RecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/collection
///
/// The authenticated user's full collection, newest purchase first.
pub async fn list_collection(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = OwnedRecordRepo::list_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/collection/recent
///
/// Collection entries purchased on or before today, newest first.
/// Preordered records with a future purchase date are excluded.
pub async fn list_recent_collection(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = OwnedRecordRepo::list_recent_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/collection
///
/// Add a record to the collection. `purchase_date` defaults to today when
/// omitted; `disc_type` must be `vinyl` or `cd`.
pub async fn add_to_collection(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateOwnedRecord>,
) -> AppResult<impl IntoResponse> {
    validate_disc_type(&input.disc_type).map_err(AppError::Core)?;

    if !RecordRepo::exists(&state.pool, input.record_id).await? {
        return Err(AppError::Core(CoreError::not_found(
            "Record",
            input.record_id,
        )));
    }

    let owned = OwnedRecordRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        owned_record_id = owned.id,
        record_id = owned.record_id,
        user_id = auth.user_id,
        "Record added to collection"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: owned })))
}

/// DELETE /api/v1/collection/{id}
///
/// Remove an entry from the collection. Other users' entries yield 403.
pub async fn remove_from_collection(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let owned = OwnedRecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Collection entry", id)))?;

    if owned.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only manage your own collection".into(),
        )));
    }

    let deleted = OwnedRecordRepo::delete(&state.pool, owned.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Collection entry", id)));
    }

    tracing::info!(owned_record_id = id, user_id = auth.user_id, "Record removed from collection");

    Ok(StatusCode::NO_CONTENT)
}
