//! Captcha challenge row model.

use sqlx::FromRow;
use vitrina_core::types::Timestamp;

/// A row from the `captcha_challenges` table.
///
/// Created on landing-page render or via the refresh endpoint; deleted
/// when consumed by a successful comparison; ignored once expired.
#[derive(Debug, Clone, FromRow)]
pub struct CaptchaChallenge {
    pub key: String,
    pub response: String,
    pub expires_at: Timestamp,
}
