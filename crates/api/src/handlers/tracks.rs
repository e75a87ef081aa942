//! Track handlers.
//!
//! Tracks are created and listed through their parent record's slug and then
//! addressed by id for updates and deletes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use waxlog_core::error::CoreError;
use waxlog_core::types::DbId;
use waxlog_db::models::track::{CreateTrack, UpdateTrack};
use waxlog_db::repositories::{RecordRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/records/{slug}/tracks
///
/// Tracklisting in track-number order.
pub async fn list_tracks(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = RecordRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Record", &slug)))?;

    let tracks = TrackRepo::list_by_record(&state.pool, record.id).await?;

    Ok(Json(DataResponse { data: tracks }))
}

/// POST /api/v1/records/{slug}/tracks
pub async fn create_track(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<CreateTrack>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Track name is required".into(),
        )));
    }

    let record = RecordRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Record", &slug)))?;

    let track = TrackRepo::create(&state.pool, auth.user_id, record.id, &input).await?;

    tracing::info!(track_id = track.id, record_id = record.id, user_id = auth.user_id, "Track created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: track })))
}

/// PUT /api/v1/tracks/{id}
pub async fn update_track(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrack>,
) -> AppResult<impl IntoResponse> {
    let track = TrackRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Track", id)))?;

    tracing::info!(track_id = track.id, user_id = auth.user_id, "Track updated");

    Ok(Json(DataResponse { data: track }))
}

/// DELETE /api/v1/tracks/{id}
pub async fn delete_track(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TrackRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Track", id)));
    }

    tracing::info!(track_id = id, user_id = auth.user_id, "Track deleted");

    Ok(StatusCode::NO_CONTENT)
}
