//! Employee photo upload
//!
//! Photos are stored on the filesystem under the data root and
//! referenced from the record by file name; serving them back is plain
//! static file service (see `build_router`).

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use phonedir_common::db::employees;
use serde::Serialize;
use std::path::PathBuf;

use crate::api::import::read_file_field;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Accepted photo extensions
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// POST /api/employees/:guid/photo response
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub filename: String,
}

/// POST /api/employees/:guid/photo
///
/// Multipart upload with a single `photo` field. The file is stored as
/// `<guid>.<ext>` (no caller-controlled path components) and the
/// record's photo reference is updated.
pub async fn upload_photo(
    State(state): State<AppState>,
    Path(guid): Path<String>,
    multipart: Multipart,
) -> ApiResult<Json<PhotoResponse>> {
    // 404 before touching the filesystem
    employees::get_employee(&state.db, &guid)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee not found: {}", guid)))?;

    let (original_name, bytes) = read_file_field(multipart, "photo").await?;

    let ext = PathBuf::from(&original_name)
        .extension()
        .and_then(|e| e.to_str().map(str::to_lowercase))
        .ok_or_else(|| {
            ApiError::BadRequest(format!("Invalid file extension for: {}", original_name))
        })?;

    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ApiError::BadRequest(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    // The payload must actually decode as an image
    image::load_from_memory(&bytes)
        .map_err(|e| ApiError::BadRequest(format!("Invalid image file ({}): {}", ext, e)))?;

    tokio::fs::create_dir_all(&state.photos_dir).await?;

    let filename = format!("{}.{}", guid, ext);
    tokio::fs::write(state.photos_dir.join(&filename), &bytes).await?;

    employees::set_photo(&state.db, &guid, &filename).await?;

    tracing::info!(guid = %guid, filename = %filename, "Photo uploaded");
    Ok(Json(PhotoResponse { filename }))
}
