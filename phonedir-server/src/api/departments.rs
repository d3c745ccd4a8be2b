//! Department list endpoint

use axum::{extract::State, Json};
use phonedir_common::db::employees;

use crate::error::ApiResult;
use crate::AppState;

/// GET /api/departments
///
/// Distinct non-empty department values, sorted. Feeds the department
/// filter dropdown in the frontend.
pub async fn list_departments(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let departments = employees::distinct_departments(&state.db).await?;
    Ok(Json(departments))
}
