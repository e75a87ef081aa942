//! Band catalogue handlers.
//!
//! Bands are addressed by slug. Slugs are derived from the name once at
//! creation and never regenerated, so renames keep URLs stable. Slugs are not
//! unique; lookups resolve to the oldest matching row.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use waxlog_core::error::CoreError;
use waxlog_core::pagination::{page_offset, resolve_page, total_pages, PAGE_SIZE};
use waxlog_db::models::band::{CreateBand, UpdateBand};
use waxlog_db::repositories::BandRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// GET /api/v1/bands
///
/// All bands in name order, unpaginated.
pub async fn list_bands(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let bands = BandRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: bands }))
}

/// GET /api/v1/bands/page/{page}
///
/// Paginated band listing, 15 per page, sorted by name. The page segment is
/// accepted as raw text: non-numeric input serves page 1 and out-of-range
/// pages clamp to the last page instead of erroring.
pub async fn list_bands_page(
    State(state): State<AppState>,
    Path(raw_page): Path<String>,
) -> AppResult<impl IntoResponse> {
    let total_items = BandRepo::count(&state.pool).await?;
    let pages = total_pages(total_items);
    let page = resolve_page(&raw_page, pages);

    let bands = BandRepo::list_page(&state.pool, PAGE_SIZE, page_offset(page)).await?;

    Ok(Json(PageResponse {
        data: bands,
        page,
        total_pages: pages,
        total_items,
    }))
}

/// GET /api/v1/bands/{slug}
///
/// Band detail with creator username and a comma-joined list of record
/// titles, newest release first.
pub async fn get_band(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let detail = BandRepo::detail_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Band", &slug)))?;

    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/bands
pub async fn create_band(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBand>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Band name is required".into(),
        )));
    }

    let band = BandRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(band_id = band.id, user_id = auth.user_id, "Band created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: band })))
}

/// PUT /api/v1/bands/{slug}
///
/// Partial update. The slug stays unchanged even when the name does not.
pub async fn update_band(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateBand>,
) -> AppResult<impl IntoResponse> {
    let band = BandRepo::update_by_slug(&state.pool, auth.user_id, &slug, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Band", &slug)))?;

    tracing::info!(band_id = band.id, user_id = auth.user_id, "Band updated");

    Ok(Json(DataResponse { data: band }))
}

/// DELETE /api/v1/bands/{slug}
pub async fn delete_band(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = BandRepo::delete_by_slug(&state.pool, &slug).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Band", &slug)));
    }

    tracing::info!(%slug, user_id = auth.user_id, "Band deleted");

    Ok(StatusCode::NO_CONTENT)
}
