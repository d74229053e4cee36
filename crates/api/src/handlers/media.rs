//! Media file serving with persistent-volume fallback.
//!
//! Uploads live on the persistent volume (`MEDIA_ROOT`). A file missing
//! from the volume is looked up in the local directory
//! (`LOCAL_MEDIA_ROOT`) before answering 404. This mirrors deployments where
//! seed assets ship with the image while uploads land on the volume.

use std::path::{Component, Path as FsPath, PathBuf};

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /media/{*path}
pub async fn serve(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> AppResult<Response> {
    let relative = sanitize(&path)
        .ok_or_else(|| AppError::NotFound("Archivo no encontrado".into()))?;

    for root in [&state.config.media_root, &state.config.local_media_root] {
        let candidate = root.join(&relative);

        match tokio::fs::metadata(&candidate).await {
            Ok(meta) if meta.is_file() => {}
            _ => continue,
        }

        let bytes = tokio::fs::read(&candidate)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to read media file: {e}")))?;

        return Ok((
            [(header::CONTENT_TYPE, content_type_for(&relative))],
            bytes,
        )
            .into_response());
    }

    Err(AppError::NotFound("Archivo no encontrado".into()))
}

/// Normalize a client-supplied media path. Returns `None` for anything
/// that could escape the media roots (`..`, absolute paths, drive
/// prefixes) or an empty path.
fn sanitize(path: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in FsPath::new(path).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

/// Content type from the file extension.
fn content_type_for(path: &FsPath) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
