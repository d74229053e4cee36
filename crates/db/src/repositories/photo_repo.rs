//! Repository for the `photos` table.
//!
//! All listing queries apply the display-ordering invariant:
//! `ORDER BY sort_order, uploaded_at`.

use sqlx::PgPool;
use vitrina_core::types::DbId;

use crate::models::photo::{CreatePhoto, Photo, UpdatePhoto};

/// Column list for `photos` queries.
const PHOTO_COLUMNS: &str = "id, subcategory_id, image_path, description, sort_order, uploaded_at";

/// Provides CRUD operations for photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a photo row for an asset already written to the media store.
    ///
    /// A blank or missing description inherits the subcategory's name.
    pub async fn create(pool: &PgPool, input: &CreatePhoto) -> Result<Photo, sqlx::Error> {
        let description = match input
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            Some(d) => Some(d.to_string()),
            None => {
                sqlx::query_scalar::<_, String>("SELECT name FROM subcategories WHERE id = $1")
                    .bind(input.subcategory_id)
                    .fetch_optional(pool)
                    .await?
            }
        };

        let query = format!(
            "INSERT INTO photos (subcategory_id, image_path, description, sort_order) \
             VALUES ($1, $2, $3, COALESCE($4, 0)) \
             RETURNING {PHOTO_COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(input.subcategory_id)
            .bind(&input.image_path)
            .bind(description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a photo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {PHOTO_COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a subcategory's photos in display order.
    pub async fn list_by_subcategory(
        pool: &PgPool,
        subcategory_id: DbId,
    ) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {PHOTO_COLUMNS} FROM photos \
             WHERE subcategory_id = $1 \
             ORDER BY sort_order, uploaded_at"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(subcategory_id)
            .fetch_all(pool)
            .await
    }

    /// First photo of a subcategory in display order, used as the
    /// landing-page representative.
    pub async fn first_by_subcategory(
        pool: &PgPool,
        subcategory_id: DbId,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {PHOTO_COLUMNS} FROM photos \
             WHERE subcategory_id = $1 \
             ORDER BY sort_order, uploaded_at \
             LIMIT 1"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(subcategory_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a photo's description and/or sort order. The stored asset
    /// and upload timestamp are immutable.
    ///
    /// Returns `None` if no photo with the ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePhoto,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "UPDATE photos SET \
                 description = COALESCE($2, description), \
                 sort_order = COALESCE($3, sort_order) \
             WHERE id = $1 \
             RETURNING {PHOTO_COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(input.description.as_deref())
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a photo row. Returns `true` if a photo was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
