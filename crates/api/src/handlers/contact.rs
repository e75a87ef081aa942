//! Contact form handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use waxlog_core::contact::validate_contact;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub subject: String,
    pub email: String,
    pub message: String,
}

/// POST /api/v1/contact
///
/// Validate and forward a visitor message to the site inbox over SMTP. The
/// visitor's address goes into the Reply-To header so staff can answer
/// directly. Returns 202 once the message is handed to the mail relay.
///
/// When SMTP is not configured the message is logged and dropped; the
/// endpoint still returns 202 so the form works in development.
pub async fn send_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> AppResult<impl IntoResponse> {
    validate_contact(&input.subject, &input.email, &input.message).map_err(AppError::Core)?;

    match &state.mailer {
        Some(mailer) => {
            mailer
                .send_contact(&input.subject, &input.email, &input.message)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to send contact mail: {e}")))?;

            tracing::info!(reply_to = %input.email, "Contact message sent");
        }
        None => {
            tracing::warn!(
                reply_to = %input.email,
                subject = %input.subject,
                "SMTP not configured, contact message dropped"
            );
        }
    }

    Ok(StatusCode::ACCEPTED)
}
