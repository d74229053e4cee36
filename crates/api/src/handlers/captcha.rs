//! Captcha challenge issuance.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use serde::Serialize;
use vitrina_core::captcha::{self, Challenge};
use vitrina_db::repositories::CaptchaRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Fresh challenge payload handed to the landing page script.
#[derive(Debug, Serialize)]
pub struct CaptchaRefreshResponse {
    pub key: String,
    pub question: String,
}

/// POST /captcha/refresh/
///
/// Issue a fresh challenge, e.g. after a failed submission.
pub async fn refresh(State(state): State<AppState>) -> AppResult<Json<CaptchaRefreshResponse>> {
    let challenge = issue_challenge(&state).await?;
    Ok(Json(CaptchaRefreshResponse {
        key: challenge.key,
        question: challenge.question,
    }))
}

/// Generate and store a new challenge. Shared with the landing page
/// handler, which embeds a challenge in the contact form.
///
/// Expired rows are purged opportunistically on each issuance; a purge
/// failure only costs stale rows, so it is logged and ignored.
pub(crate) async fn issue_challenge(state: &AppState) -> Result<Challenge, sqlx::Error> {
    if let Err(err) = CaptchaRepo::purge_expired(&state.pool).await {
        tracing::warn!(error = %err, "Failed to purge expired captcha challenges");
    }

    let challenge = captcha::generate();
    let expires_at = Utc::now() + Duration::seconds(state.config.captcha_ttl_secs);
    CaptchaRepo::insert(&state.pool, &challenge.key, &challenge.response, expires_at).await?;

    Ok(challenge)
}
