//! Employee CRUD and search endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use phonedir_common::db::{employees, Employee, EmployeeUpdate, NewEmployee};
use phonedir_common::search::{search_employees, SearchParams};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::AppState;

/// Query parameters for GET /api/employees
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Free-text query, case-insensitive substring over all fields
    #[serde(default)]
    pub search: Option<String>,
    /// Exact department filter
    #[serde(default)]
    pub department: Option<String>,
}

/// POST /api/employees request body
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub department: String,
    pub full_name: String,
    pub position: String,
    #[serde(default)]
    pub internal_phone: Option<String>,
    #[serde(default)]
    pub common_phone: Option<String>,
    #[serde(default)]
    pub city_phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// POST /api/employees response
#[derive(Debug, Serialize)]
pub struct CreateEmployeeResponse {
    pub guid: String,
}

/// GET /api/employees?search=&department=
///
/// List records matching the optional free-text query and department
/// filter; both absent returns the whole directory.
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Employee>>> {
    let params = SearchParams {
        search: query.search,
        department: query.department,
    };
    let records = search_employees(&state.db, &params).await?;
    Ok(Json(records))
}

/// POST /api/employees
///
/// Create a single record. Empty required fields are rejected with 400.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<CreateEmployeeResponse>)> {
    let new = NewEmployee {
        department: request.department,
        full_name: request.full_name,
        position: request.position,
        internal_phone: non_empty(request.internal_phone),
        common_phone: non_empty(request.common_phone),
        city_phone: non_empty(request.city_phone),
        email: non_empty(request.email),
    };

    let created = employees::insert_employee(&state.db, &new).await?;

    tracing::info!(guid = %created.guid, "Employee created");
    Ok((
        StatusCode::CREATED,
        Json(CreateEmployeeResponse { guid: created.guid }),
    ))
}

/// PUT /api/employees/:guid
///
/// Partial update; unspecified fields retain their prior values.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(guid): Path<String>,
    Json(update): Json<EmployeeUpdate>,
) -> ApiResult<Json<Employee>> {
    let updated = employees::update_employee(&state.db, &guid, &update).await?;

    tracing::info!(guid = %guid, "Employee updated");
    Ok(Json(updated))
}

/// DELETE /api/employees/:guid
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> ApiResult<StatusCode> {
    employees::delete_employee(&state.db, &guid).await?;

    tracing::info!(guid = %guid, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
