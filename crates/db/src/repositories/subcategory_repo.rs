//! Repository for the `subcategories` table.

use sqlx::PgPool;
use vitrina_core::types::DbId;

use crate::models::category::{
    CreateSubcategory, Subcategory, SubcategoryWithCategory, UpdateSubcategory,
};

/// Column list for `subcategories` queries.
const SUBCATEGORY_COLUMNS: &str = "id, category_id, name";

/// Provides CRUD operations for subcategories.
pub struct SubcategoryRepo;

impl SubcategoryRepo {
    /// Create a subcategory under its parent category.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubcategory,
    ) -> Result<Subcategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO subcategories (category_id, name) VALUES ($1, $2) \
             RETURNING {SUBCATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(input.category_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a subcategory by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subcategory>, sqlx::Error> {
        let query = format!("SELECT {SUBCATEGORY_COLUMNS} FROM subcategories WHERE id = $1");
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a subcategory joined with its parent category's name.
    pub async fn find_with_category(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SubcategoryWithCategory>, sqlx::Error> {
        sqlx::query_as::<_, SubcategoryWithCategory>(
            "SELECT s.id, s.category_id, s.name, c.name AS category_name \
             FROM subcategories s \
             JOIN categories c ON c.id = s.category_id \
             WHERE s.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List the subcategories of one category, ordered by name.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Subcategory>, sqlx::Error> {
        let query = format!(
            "SELECT {SUBCATEGORY_COLUMNS} FROM subcategories \
             WHERE category_id = $1 ORDER BY name"
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List all subcategories (sitemap generation), grouped by category.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Subcategory>, sqlx::Error> {
        let query = format!(
            "SELECT {SUBCATEGORY_COLUMNS} FROM subcategories ORDER BY category_id, name"
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Rename a subcategory. Returns `None` if no subcategory with the ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubcategory,
    ) -> Result<Option<Subcategory>, sqlx::Error> {
        let query = format!(
            "UPDATE subcategories SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {SUBCATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a subcategory. Cascade deletes its photos.
    ///
    /// Returns `true` if a subcategory was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subcategories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
