//! Employee record store queries
//!
//! The store carries no business logic beyond required-field validation
//! on direct create/update. The batch insert used by the import
//! pipeline is transactional and exempt from that validation (the
//! import is lenient at row level by design, see DESIGN.md).

use crate::db::models::{Employee, EmployeeUpdate, NewEmployee};
use crate::{Error, Result};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Insert a single record after validating required fields.
///
/// Returns the persisted record with guid and timestamps assigned.
pub async fn insert_employee(pool: &SqlitePool, new: &NewEmployee) -> Result<Employee> {
    validate_required(&new.department, &new.full_name, &new.position)?;

    let employee = Employee {
        guid: Uuid::new_v4().to_string(),
        department: new.department.clone(),
        full_name: new.full_name.clone(),
        position: new.position.clone(),
        internal_phone: new.internal_phone.clone(),
        common_phone: new.common_phone.clone(),
        city_phone: new.city_phone.clone(),
        email: new.email.clone(),
        photo: None,
        created_at: Utc::now().to_rfc3339(),
        updated_at: Utc::now().to_rfc3339(),
    };

    insert_row(pool, &employee).await?;
    Ok(employee)
}

/// Insert a batch of staged records in a single transaction.
///
/// All-or-nothing: if any insert fails the transaction is rolled back
/// and zero rows remain persisted. Returns the assigned guids in input
/// order.
pub async fn insert_employees(pool: &SqlitePool, rows: &[NewEmployee]) -> Result<Vec<String>> {
    let now = Utc::now().to_rfc3339();
    let mut guids = Vec::with_capacity(rows.len());

    let mut tx = pool.begin().await?;
    for new in rows {
        let guid = Uuid::new_v4().to_string();
        sqlx::query(
            r#"
            INSERT INTO employees
                (guid, department, full_name, position,
                 internal_phone, common_phone, city_phone, email,
                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&guid)
        .bind(&new.department)
        .bind(&new.full_name)
        .bind(&new.position)
        .bind(&new.internal_phone)
        .bind(&new.common_phone)
        .bind(&new.city_phone)
        .bind(&new.email)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;
        guids.push(guid);
    }
    tx.commit().await?;

    Ok(guids)
}

/// Load one record by guid
pub async fn get_employee(pool: &SqlitePool, guid: &str) -> Result<Option<Employee>> {
    let row = sqlx::query(
        r#"
        SELECT guid, department, full_name, position,
               internal_phone, common_phone, city_phone, email, photo,
               created_at, updated_at
        FROM employees
        WHERE guid = ?
        "#,
    )
    .bind(guid)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| row_to_employee(&r)))
}

/// Apply a partial update: unspecified fields retain their prior
/// values, `updated_at` is bumped. Unknown guid surfaces `NotFound`.
pub async fn update_employee(
    pool: &SqlitePool,
    guid: &str,
    update: &EmployeeUpdate,
) -> Result<Employee> {
    let current = get_employee(pool, guid)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Employee not found: {}", guid)))?;

    let merged = Employee {
        guid: current.guid,
        department: update.department.clone().unwrap_or(current.department),
        full_name: update.full_name.clone().unwrap_or(current.full_name),
        position: update.position.clone().unwrap_or(current.position),
        internal_phone: update.internal_phone.clone().or(current.internal_phone),
        common_phone: update.common_phone.clone().or(current.common_phone),
        city_phone: update.city_phone.clone().or(current.city_phone),
        email: update.email.clone().or(current.email),
        photo: current.photo,
        created_at: current.created_at,
        updated_at: Utc::now().to_rfc3339(),
    };

    validate_required(&merged.department, &merged.full_name, &merged.position)?;

    sqlx::query(
        r#"
        UPDATE employees
        SET department = ?, full_name = ?, position = ?,
            internal_phone = ?, common_phone = ?, city_phone = ?, email = ?,
            updated_at = ?
        WHERE guid = ?
        "#,
    )
    .bind(&merged.department)
    .bind(&merged.full_name)
    .bind(&merged.position)
    .bind(&merged.internal_phone)
    .bind(&merged.common_phone)
    .bind(&merged.city_phone)
    .bind(&merged.email)
    .bind(&merged.updated_at)
    .bind(&merged.guid)
    .execute(pool)
    .await?;

    Ok(merged)
}

/// Delete a record. Unknown guid surfaces `NotFound`.
pub async fn delete_employee(pool: &SqlitePool, guid: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM employees WHERE guid = ?")
        .bind(guid)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Employee not found: {}", guid)));
    }
    Ok(())
}

/// Load records, optionally restricted to one department (exact,
/// case-sensitive equality). Order is stable: insertion order via rowid.
pub async fn list_by_department(
    pool: &SqlitePool,
    department: Option<&str>,
) -> Result<Vec<Employee>> {
    let rows = match department {
        Some(dept) => {
            sqlx::query(
                r#"
                SELECT guid, department, full_name, position,
                       internal_phone, common_phone, city_phone, email, photo,
                       created_at, updated_at
                FROM employees
                WHERE department = ?
                ORDER BY rowid
                "#,
            )
            .bind(dept)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query(
                r#"
                SELECT guid, department, full_name, position,
                       internal_phone, common_phone, city_phone, email, photo,
                       created_at, updated_at
                FROM employees
                ORDER BY rowid
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.iter().map(row_to_employee).collect())
}

/// Distinct non-empty department values, sorted
pub async fn distinct_departments(pool: &SqlitePool) -> Result<Vec<String>> {
    let departments: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT department FROM employees WHERE department <> '' ORDER BY department",
    )
    .fetch_all(pool)
    .await?;

    Ok(departments)
}

/// Attach a stored photo file name to a record
pub async fn set_photo(pool: &SqlitePool, guid: &str, filename: &str) -> Result<()> {
    let result = sqlx::query("UPDATE employees SET photo = ?, updated_at = ? WHERE guid = ?")
        .bind(filename)
        .bind(Utc::now().to_rfc3339())
        .bind(guid)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Employee not found: {}", guid)));
    }
    Ok(())
}

/// Required fields must be non-empty after trimming
fn validate_required(department: &str, full_name: &str, position: &str) -> Result<()> {
    for (field, value) in [
        ("department", department),
        ("full_name", full_name),
        ("position", position),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Validation(format!(
                "Required field is empty: {}",
                field
            )));
        }
    }
    Ok(())
}

async fn insert_row(pool: &SqlitePool, employee: &Employee) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO employees
            (guid, department, full_name, position,
             internal_phone, common_phone, city_phone, email, photo,
             created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&employee.guid)
    .bind(&employee.department)
    .bind(&employee.full_name)
    .bind(&employee.position)
    .bind(&employee.internal_phone)
    .bind(&employee.common_phone)
    .bind(&employee.city_phone)
    .bind(&employee.email)
    .bind(&employee.photo)
    .bind(&employee.created_at)
    .bind(&employee.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

fn row_to_employee(row: &SqliteRow) -> Employee {
    Employee {
        guid: row.get("guid"),
        department: row.get("department"),
        full_name: row.get("full_name"),
        position: row.get("position"),
        internal_phone: row.get("internal_phone"),
        common_phone: row.get("common_phone"),
        city_phone: row.get("city_phone"),
        email: row.get("email"),
        photo: row.get("photo"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
