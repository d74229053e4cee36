//! Admin CRUD for the category/subcategory hierarchy.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vitrina_core::types::DbId;
use vitrina_db::models::category::{
    Category, CreateCategory, CreateSubcategory, Subcategory, UpdateCategory, UpdateSubcategory,
};
use vitrina_db::repositories::{CategoryRepo, SubcategoryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/admin/categories
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/admin/categories
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_name(&input.name)?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/admin/categories/{id}
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Categor\u{00ed}a no encontrada".into()))?;
    Ok(Json(category))
}

/// DELETE /api/admin/categories/{id}
///
/// Cascade deletes the category's subcategories and their photos.
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Categor\u{00ed}a no encontrada".into()))
    }
}

// ---------------------------------------------------------------------------
// Subcategories
// ---------------------------------------------------------------------------

/// GET /api/admin/categories/{category_id}/subcategories
pub async fn list_subcategories(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<Json<Vec<Subcategory>>> {
    ensure_category_exists(&state, category_id).await?;
    let subcategories = SubcategoryRepo::list_by_category(&state.pool, category_id).await?;
    Ok(Json(subcategories))
}

/// POST /api/admin/categories/{category_id}/subcategories
///
/// Overrides `input.category_id` with the value from the URL path.
pub async fn create_subcategory(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(mut input): Json<CreateSubcategory>,
) -> AppResult<(StatusCode, Json<Subcategory>)> {
    validate_name(&input.name)?;
    ensure_category_exists(&state, category_id).await?;
    input.category_id = category_id;
    let subcategory = SubcategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(subcategory)))
}

/// PUT /api/admin/subcategories/{id}
pub async fn update_subcategory(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubcategory>,
) -> AppResult<Json<Subcategory>> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    let subcategory = SubcategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Subcategor\u{00ed}a no encontrada".into()))?;
    Ok(Json(subcategory))
}

/// DELETE /api/admin/subcategories/{id}
///
/// Cascade deletes the subcategory's photos.
pub async fn delete_subcategory(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SubcategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Subcategor\u{00ed}a no encontrada".into()))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Names must be non-blank and fit the column width.
fn validate_name(name: &str) -> AppResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("El nombre es requerido".into()));
    }
    if trimmed.chars().count() > vitrina_core::types::MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "El nombre no puede superar {} caracteres",
            vitrina_core::types::MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Verify that a category exists, returning NotFound if it does not.
async fn ensure_category_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if CategoryRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound("Categor\u{00ed}a no encontrada".into()));
    }
    Ok(())
}
