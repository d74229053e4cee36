//! Public photo listing API and admin photo management.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use vitrina_core::image as image_pipeline;
use vitrina_core::types::{DbId, MAX_DESCRIPTION_LEN};
use vitrina_db::models::photo::{CreatePhoto, Photo, UpdatePhoto};
use vitrina_db::repositories::{PhotoRepo, SubcategoryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public listing
// ---------------------------------------------------------------------------

/// Subcategory metadata in the photo listing response.
#[derive(Debug, Serialize)]
pub struct SubcategoryInfo {
    pub id: DbId,
    pub nombre: String,
    pub categoria: String,
}

/// One photo in the listing response.
#[derive(Debug, Serialize)]
pub struct PhotoInfo {
    pub id: DbId,
    pub imagen_url: String,
    pub descripcion: String,
    pub orden: i32,
}

/// Photo listing response payload.
#[derive(Debug, Serialize)]
pub struct SubcategoryPhotos {
    pub success: bool,
    pub subcategoria: SubcategoryInfo,
    pub fotos: Vec<PhotoInfo>,
}

/// GET /api/subcategoria/{id}/fotos/
///
/// Ordered photo list for one subcategory (sort_order, then upload time).
pub async fn list_by_subcategory(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SubcategoryPhotos>> {
    let subcategory = SubcategoryRepo::find_with_category(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subcategor\u{00ed}a no encontrada".into()))?;

    let photos = PhotoRepo::list_by_subcategory(&state.pool, id).await?;

    let fotos = photos
        .into_iter()
        .map(|photo| PhotoInfo {
            id: photo.id,
            imagen_url: format!("/media/{}", photo.image_path),
            descripcion: photo.description.unwrap_or_default(),
            orden: photo.sort_order,
        })
        .collect();

    Ok(Json(SubcategoryPhotos {
        success: true,
        subcategoria: SubcategoryInfo {
            id: subcategory.id,
            nombre: subcategory.name,
            categoria: subcategory.category_name,
        },
        fotos,
    }))
}

// ---------------------------------------------------------------------------
// Admin management
// ---------------------------------------------------------------------------

/// POST /api/admin/photos
///
/// Multipart upload: `subcategory_id` (required), `description`,
/// `sort_order`, and the `imagen` file (required). The image pipeline
/// shrinks and re-encodes the file; when processing fails the original
/// bytes are stored unmodified; an upload never hard-fails on a bad
/// image.
pub async fn upload(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Photo>)> {
    let mut subcategory_id: Option<DbId> = None;
    let mut description: Option<String> = None;
    let mut sort_order: Option<i32> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "subcategory_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                subcategory_id = Some(text.trim().parse().map_err(|_| {
                    AppError::BadRequest("subcategory_id debe ser un entero".into())
                })?);
            }
            "description" => {
                description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "sort_order" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                sort_order = Some(text.trim().parse().map_err(|_| {
                    AppError::BadRequest("sort_order debe ser un entero".into())
                })?);
            }
            "imagen" => {
                let filename = field.file_name().unwrap_or("imagen").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                upload = Some((filename, data.to_vec()));
            }
            _ => {}
        }
    }

    let subcategory_id = subcategory_id
        .ok_or_else(|| AppError::BadRequest("subcategory_id es requerido".into()))?;
    validate_description(description.as_deref())?;
    let (filename, data) =
        upload.ok_or_else(|| AppError::BadRequest("El archivo imagen es requerido".into()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("El archivo imagen est\u{00e1} vac\u{00ed}o".into()));
    }

    let subcategory = SubcategoryRepo::find_with_category(&state.pool, subcategory_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subcategor\u{00ed}a no encontrada".into()))?;

    let (relative_path, bytes) =
        match image_pipeline::process_upload(&data, &filename, &subcategory.category_name) {
            Ok(processed) => (processed.relative_path, processed.bytes),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    file = %filename,
                    "Image processing failed, storing original upload"
                );
                (
                    image_pipeline::fallback_path(&filename, &subcategory.category_name),
                    data,
                )
            }
        };

    write_media_file(&state, &relative_path, &bytes).await?;

    let photo = PhotoRepo::create(
        &state.pool,
        &CreatePhoto {
            subcategory_id,
            image_path: relative_path,
            description,
            sort_order,
        },
    )
    .await?;

    tracing::info!(photo_id = photo.id, path = %photo.image_path, "Photo uploaded");

    Ok((StatusCode::CREATED, Json(photo)))
}

/// PUT /api/admin/photos/{id}
///
/// Edit description and/or sort order. The stored asset is immutable.
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePhoto>,
) -> AppResult<Json<Photo>> {
    validate_description(input.description.as_deref())?;
    let photo = PhotoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Foto no encontrada".into()))?;
    Ok(Json(photo))
}

/// DELETE /api/admin/photos/{id}
///
/// Removes the row and, best-effort, the stored asset.
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let photo = PhotoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Foto no encontrada".into()))?;

    PhotoRepo::delete(&state.pool, id).await?;

    let asset = state.config.media_root.join(&photo.image_path);
    if let Err(err) = tokio::fs::remove_file(&asset).await {
        tracing::warn!(error = %err, path = %asset.display(), "Failed to remove photo asset");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Descriptions must fit the column width.
fn validate_description(description: Option<&str>) -> AppResult<()> {
    if let Some(d) = description {
        if d.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::BadRequest(format!(
                "La descripci\u{00f3}n no puede superar {MAX_DESCRIPTION_LEN} caracteres"
            )));
        }
    }
    Ok(())
}

/// Write processed upload bytes under the media root, creating the
/// category directory on first use.
async fn write_media_file(state: &AppState, relative: &str, bytes: &[u8]) -> AppResult<()> {
    let dest = state.config.media_root.join(relative);
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create media dir: {e}")))?;
    }
    tokio::fs::write(&dest, bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write media file: {e}")))?;
    Ok(())
}
