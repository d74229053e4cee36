//! Contact inquiry models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrina_core::types::{DbId, Timestamp};

/// A row from the `contacts` table.
///
/// Rows are created exclusively by the public contact endpoint and never
/// updated afterwards, except `email_sent` which flips to true once the
/// notification email goes out.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Free-text category of interest; deliberately not a foreign key.
    pub category: Option<String>,
    pub message: String,
    pub submitted_at: Timestamp,
    pub email_sent: bool,
}

/// DTO for persisting a validated contact submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub message: String,
}
