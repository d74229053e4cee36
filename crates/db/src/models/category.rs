//! Category and subcategory models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrina_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// A row from the `subcategories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subcategory {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
}

/// A subcategory joined with its parent category's name.
///
/// Used by the photo listing API and the upload path builder, both of
/// which need the category name without a second round trip.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubcategoryWithCategory {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub category_name: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

/// DTO for renaming a category.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
}

/// DTO for creating a subcategory. `category_id` is overridden from the
/// URL path by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubcategory {
    #[serde(default)]
    pub category_id: DbId,
    pub name: String,
}

/// DTO for renaming a subcategory.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubcategory {
    pub name: Option<String>,
}
