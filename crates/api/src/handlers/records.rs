//! Record catalogue handlers.
//!
//! The record detail endpoint is the composite view of the application: it
//! joins the record with its label, bands, genres, tracklisting, review
//! summary, and a discography of other records sharing at least one band.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use waxlog_core::error::CoreError;
use waxlog_core::pagination::{page_offset, resolve_page, total_pages, PAGE_SIZE};
use waxlog_db::models::band::Band;
use waxlog_db::models::genre::Genre;
use waxlog_db::models::label::Label;
use waxlog_db::models::record::{CreateRecord, Record, UpdateRecord};
use waxlog_db::models::review::{Review, ReviewItem};
use waxlog_db::models::track::Track;
use waxlog_db::repositories::{
    BandRepo, GenreRepo, LabelRepo, RecordRepo, ReviewRepo, TrackRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Composite payload for the record detail endpoint.
#[derive(Debug, Serialize)]
pub struct RecordDetailResponse {
    pub record: Record,
    pub label: Option<Label>,
    pub bands: Vec<Band>,
    pub genres: Vec<Genre>,
    pub tracks: Vec<Track>,
    /// Mean of all review scores, `None` when the record has no reviews.
    pub average_score: Option<f64>,
    /// Up to 10 most recently modified visible reviews, excluding the
    /// viewer's own.
    pub reviews: Vec<ReviewItem>,
    /// The viewer's own review, when signed in and one exists.
    pub own_review: Option<Review>,
    /// Other records sharing at least one band, deduplicated.
    pub related_records: Vec<Record>,
    /// Whether the request carried a valid token. Lets clients decide
    /// between showing a review form and a sign-in prompt.
    pub authenticated: bool,
}

/// GET /api/v1/records/page/{page}
///
/// Paginated record listing with label, band, and genre names flattened to
/// comma-joined strings, newest release first.
pub async fn list_records_page(
    State(state): State<AppState>,
    Path(raw_page): Path<String>,
) -> AppResult<impl IntoResponse> {
    let total_items = RecordRepo::count(&state.pool).await?;
    let pages = total_pages(total_items);
    let page = resolve_page(&raw_page, pages);

    let records = RecordRepo::list_page(&state.pool, PAGE_SIZE, page_offset(page)).await?;

    Ok(Json(PageResponse {
        data: records,
        page,
        total_pages: pages,
        total_items,
    }))
}

/// GET /api/v1/records/{slug}
pub async fn get_record(
    MaybeAuthUser(viewer): MaybeAuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = RecordRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Record", &slug)))?;

    let label = LabelRepo::find_by_id(&state.pool, record.label_id).await?;
    let bands = BandRepo::list_by_record(&state.pool, record.id).await?;
    let genres = GenreRepo::list_by_record(&state.pool, record.id).await?;
    let tracks = TrackRepo::list_by_record(&state.pool, record.id).await?;

    let average_score = ReviewRepo::average_score(&state.pool, record.id).await?;

    let viewer_id = viewer.as_ref().map(|v| v.user_id);
    let reviews = ReviewRepo::list_recent_for_record(&state.pool, record.id, viewer_id).await?;

    let own_review = match viewer_id {
        Some(user_id) => {
            ReviewRepo::find_by_user_and_record(&state.pool, user_id, record.id).await?
        }
        None => None,
    };

    let related_records = RecordRepo::list_by_shared_bands(&state.pool, record.id).await?;

    Ok(Json(DataResponse {
        data: RecordDetailResponse {
            record,
            label,
            bands,
            genres,
            tracks,
            average_score,
            reviews,
            own_review,
            related_records,
            authenticated: viewer.is_some(),
        },
    }))
}

/// POST /api/v1/records
///
/// Creates the record and its band/genre associations in one transaction.
pub async fn create_record(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRecord>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Record title is required".into(),
        )));
    }

    if LabelRepo::find_by_id(&state.pool, input.label_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::not_found(
            "Label",
            input.label_id,
        )));
    }

    let record = RecordRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(record_id = record.id, user_id = auth.user_id, "Record created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/records/{slug}
///
/// Partial update. Band/genre id lists, when present, replace the existing
/// association sets wholesale.
pub async fn update_record(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateRecord>,
) -> AppResult<impl IntoResponse> {
    let record = RecordRepo::update_by_slug(&state.pool, auth.user_id, &slug, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Record", &slug)))?;

    tracing::info!(record_id = record.id, user_id = auth.user_id, "Record updated");

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/records/{slug}
///
/// Cascades to tracks, reviews, and collection entries.
pub async fn delete_record(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = RecordRepo::delete_by_slug(&state.pool, &slug).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Record", &slug)));
    }

    tracing::info!(%slug, user_id = auth.user_id, "Record deleted");

    Ok(StatusCode::NO_CONTENT)
}
