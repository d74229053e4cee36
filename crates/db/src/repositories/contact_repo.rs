//! Repository for the `contacts` table.
//!
//! Contacts are create-only from the public side. The only permitted
//! mutation is flipping `email_sent` after a successful notification;
//! deletion is reserved for the admin API.

use sqlx::PgPool;
use vitrina_core::types::DbId;

use crate::models::contact::{Contact, CreateContact};

/// Column list for `contacts` queries.
const CONTACT_COLUMNS: &str =
    "id, name, email, phone, category, message, submitted_at, email_sent";

/// Provides persistence for contact inquiries.
pub struct ContactRepo;

impl ContactRepo {
    /// Persist a validated contact submission.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone, category, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.phone.as_deref())
            .bind(input.category.as_deref())
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all contacts, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query =
            format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY submitted_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Record that the notification email for a contact went out.
    ///
    /// Returns `true` if a row was updated.
    pub async fn mark_email_sent(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE contacts SET email_sent = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a contact (admin triage). Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored contacts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await
    }
}
