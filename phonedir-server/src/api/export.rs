//! Export table endpoint

use axum::{extract::State, Json};
use phonedir_common::export::{directory_table, DirectoryTable};

use crate::error::ApiResult;
use crate::AppState;

/// GET /api/export/table
///
/// The full directory as display strings under the fixed column label
/// set. This is the data contract consumed by the external PDF
/// renderer; layout and styling happen there.
pub async fn export_table(State(state): State<AppState>) -> ApiResult<Json<DirectoryTable>> {
    let table = directory_table(&state.db).await?;
    Ok(Json(table))
}
