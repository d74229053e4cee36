//! Photo models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrina_core::types::{DbId, Timestamp};

/// A row from the `photos` table.
///
/// `image_path` is relative to the media root. Display ordering is
/// `(sort_order ASC, uploaded_at ASC)`; `sort_order` is intentionally not
/// unique, ties are broken by upload time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub subcategory_id: DbId,
    pub image_path: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub uploaded_at: Timestamp,
}

/// DTO for inserting a photo after its asset has been written to the
/// media store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhoto {
    pub subcategory_id: DbId,
    pub image_path: String,
    /// Blank or missing descriptions inherit the subcategory's name.
    pub description: Option<String>,
    /// Defaults to 0.
    pub sort_order: Option<i32>,
}

/// DTO for editing a photo's metadata. The stored asset is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePhoto {
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
