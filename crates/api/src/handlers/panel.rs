//! User panel handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use waxlog_db::models::owned_record::OwnedRecordItem;
use waxlog_db::models::review::Review;
use waxlog_db::repositories::{OwnedRecordRepo, ReviewRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// The signed-in user's dashboard payload.
#[derive(Debug, Serialize)]
pub struct PanelResponse {
    pub username: String,
    /// Collection entries whose purchase date is not in the future,
    /// newest first.
    pub recent_records: Vec<OwnedRecordItem>,
    /// The user's reviews, most recently modified first.
    pub reviews: Vec<Review>,
}

/// GET /api/v1/panel
pub async fn get_panel(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let recent_records = OwnedRecordRepo::list_recent_for_user(&state.pool, auth.user_id).await?;
    let reviews = ReviewRepo::list_by_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse {
        data: PanelResponse {
            username: auth.username,
            recent_records,
            reviews,
        },
    }))
}
