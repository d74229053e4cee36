//! Repository for the `captcha_challenges` table.
//!
//! Lifecycle: a challenge is inserted when the landing page renders (or
//! the refresh endpoint is hit), looked up while still valid when a form
//! arrives, and deleted once a submission matches it. Expired rows are
//! ignored by lookups and purged opportunistically.

use sqlx::PgPool;
use vitrina_core::types::Timestamp;

use crate::models::captcha::CaptchaChallenge;

/// Provides storage for captcha challenges.
pub struct CaptchaRepo;

impl CaptchaRepo {
    /// Store a freshly generated challenge.
    pub async fn insert(
        pool: &PgPool,
        key: &str,
        response: &str,
        expires_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO captcha_challenges (key, response, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(key)
        .bind(response)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Look up a challenge that has not expired yet.
    pub async fn find_valid(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<CaptchaChallenge>, sqlx::Error> {
        sqlx::query_as::<_, CaptchaChallenge>(
            "SELECT key, response, expires_at FROM captcha_challenges \
             WHERE key = $1 AND expires_at > now()",
        )
        .bind(key)
        .fetch_optional(pool)
        .await
    }

    /// Delete a consumed challenge. Returns `true` if a row was deleted,
    /// which makes consumption at-most-once under concurrent submissions.
    pub async fn delete(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM captcha_challenges WHERE key = $1")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Drop expired challenges. Returns the number of rows removed.
    pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM captcha_challenges WHERE expires_at <= now()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
