//! Genre catalogue handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use waxlog_core::error::CoreError;
use waxlog_core::pagination::{page_offset, resolve_page, total_pages, PAGE_SIZE};
use waxlog_db::models::genre::{CreateGenre, GenreDetail, UpdateGenre};
use waxlog_db::models::record::Record;
use waxlog_db::repositories::{GenreRepo, RecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Genre detail plus its most recent releases.
#[derive(Debug, Serialize)]
pub struct GenreDetailResponse {
    #[serde(flatten)]
    pub genre: GenreDetail,
    pub records: Vec<Record>,
}

/// GET /api/v1/genres
///
/// All genres in name order, unpaginated.
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: genres }))
}

/// GET /api/v1/genres/page/{page}
pub async fn list_genres_page(
    State(state): State<AppState>,
    Path(raw_page): Path<String>,
) -> AppResult<impl IntoResponse> {
    let total_items = GenreRepo::count(&state.pool).await?;
    let pages = total_pages(total_items);
    let page = resolve_page(&raw_page, pages);

    let genres = GenreRepo::list_page(&state.pool, PAGE_SIZE, page_offset(page)).await?;

    Ok(Json(PageResponse {
        data: genres,
        page,
        total_pages: pages,
        total_items,
    }))
}

/// GET /api/v1/genres/{slug}
///
/// Genre detail with creator username and up to 10 of its newest records.
pub async fn get_genre(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::detail_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Genre", &slug)))?;

    let records = RecordRepo::list_by_genre(&state.pool, genre.id).await?;

    Ok(Json(DataResponse {
        data: GenreDetailResponse { genre, records },
    }))
}

/// POST /api/v1/genres
pub async fn create_genre(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Genre name is required".into(),
        )));
    }

    let genre = GenreRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(genre_id = genre.id, user_id = auth.user_id, "Genre created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: genre })))
}

/// PUT /api/v1/genres/{slug}
pub async fn update_genre(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::update_by_slug(&state.pool, auth.user_id, &slug, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Genre", &slug)))?;

    tracing::info!(genre_id = genre.id, user_id = auth.user_id, "Genre updated");

    Ok(Json(DataResponse { data: genre }))
}

/// DELETE /api/v1/genres/{slug}
///
/// Records tagged with the genre keep existing; only the tagging disappears.
pub async fn delete_genre(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = GenreRepo::delete_by_slug(&state.pool, &slug).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Genre", &slug)));
    }

    tracing::info!(%slug, user_id = auth.user_id, "Genre deleted");

    Ok(StatusCode::NO_CONTENT)
}
