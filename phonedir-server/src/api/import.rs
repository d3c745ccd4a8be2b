//! Spreadsheet import endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};
use phonedir_common::import::import_spreadsheet;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /api/import response
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported_count: usize,
}

/// POST /api/import
///
/// Multipart upload with a single `file` field carrying a CSV or XLSX
/// payload. All-or-nothing: either every row of the file is committed
/// or none is.
pub async fn import_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<ImportResponse>> {
    let (filename, bytes) = read_file_field(multipart, "file").await?;

    let imported_count = import_spreadsheet(&state.db, &filename, &bytes).await?;

    tracing::info!(filename, imported_count, "Spreadsheet imported");
    Ok(Json(ImportResponse { imported_count }))
}

/// Pull the named file field out of a multipart request
pub(crate) async fn read_file_field(
    mut multipart: Multipart,
    field_name: &str,
) -> ApiResult<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let filename = field
            .file_name()
            .map(String::from)
            .ok_or_else(|| ApiError::BadRequest("No filename provided".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Multipart error: {}", e)))?
            .to_vec();

        if bytes.is_empty() {
            return Err(ApiError::BadRequest("Empty file provided".to_string()));
        }
        return Ok((filename, bytes));
    }

    Err(ApiError::BadRequest(format!(
        "No '{}' field found",
        field_name
    )))
}
