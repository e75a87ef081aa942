//! Record-label catalogue handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use waxlog_core::error::CoreError;
use waxlog_core::pagination::{page_offset, resolve_page, total_pages, PAGE_SIZE};
use waxlog_db::models::label::{CreateLabel, LabelDetail, UpdateLabel};
use waxlog_db::models::record::Record;
use waxlog_db::repositories::{LabelRepo, RecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Label detail plus its most recent releases.
#[derive(Debug, Serialize)]
pub struct LabelDetailResponse {
    #[serde(flatten)]
    pub label: LabelDetail,
    pub records: Vec<Record>,
}

/// GET /api/v1/labels
///
/// All labels in name order, unpaginated.
pub async fn list_labels(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let labels = LabelRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: labels }))
}

/// GET /api/v1/labels/page/{page}
pub async fn list_labels_page(
    State(state): State<AppState>,
    Path(raw_page): Path<String>,
) -> AppResult<impl IntoResponse> {
    let total_items = LabelRepo::count(&state.pool).await?;
    let pages = total_pages(total_items);
    let page = resolve_page(&raw_page, pages);

    let labels = LabelRepo::list_page(&state.pool, PAGE_SIZE, page_offset(page)).await?;

    Ok(Json(PageResponse {
        data: labels,
        page,
        total_pages: pages,
        total_items,
    }))
}

/// GET /api/v1/labels/{slug}
///
/// Label detail with creator username and up to 10 of its newest records.
pub async fn get_label(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let label = LabelRepo::detail_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Label", &slug)))?;

    let records = RecordRepo::list_by_label(&state.pool, label.id).await?;

    Ok(Json(DataResponse {
        data: LabelDetailResponse { label, records },
    }))
}

/// POST /api/v1/labels
pub async fn create_label(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateLabel>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Label name is required".into(),
        )));
    }

    let label = LabelRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(label_id = label.id, user_id = auth.user_id, "Label created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: label })))
}

/// PUT /api/v1/labels/{slug}
pub async fn update_label(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateLabel>,
) -> AppResult<impl IntoResponse> {
    let label = LabelRepo::update_by_slug(&state.pool, auth.user_id, &slug, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Label", &slug)))?;

    tracing::info!(label_id = label.id, user_id = auth.user_id, "Label updated");

    Ok(Json(DataResponse { data: label }))
}

/// DELETE /api/v1/labels/{slug}
///
/// Deleting a label cascades to its records.
pub async fn delete_label(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = LabelRepo::delete_by_slug(&state.pool, &slug).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Label", &slug)));
    }

    tracing::info!(%slug, user_id = auth.user_id, "Label deleted");

    Ok(StatusCode::NO_CONTENT)
}
