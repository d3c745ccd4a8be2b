//! Export table assembly
//!
//! The PDF renderer is an external collaborator; the directory only
//! supplies it the full ordered record list under the fixed column
//! label set. Layout and styling are not this crate's concern.

use crate::db::employees;
use crate::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// Document title used by the renderer
pub const EXPORT_TITLE: &str = "Телефонный справочник";

/// Fixed column labels, in render order
pub const EXPORT_COLUMNS: [&str; 7] = [
    "Отдел",
    "ФИО",
    "Должность",
    "Внутр. №",
    "Общ. №",
    "Городской №",
    "Email",
];

/// The complete directory as display strings, one row per employee in
/// insertion order. Absent optional fields render as empty cells.
#[derive(Debug, Serialize)]
pub struct DirectoryTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Assemble the export table from the full record list
pub async fn directory_table(pool: &SqlitePool) -> Result<DirectoryTable> {
    let records = employees::list_by_department(pool, None).await?;

    let rows = records
        .into_iter()
        .map(|e| {
            vec![
                e.department,
                e.full_name,
                e.position,
                e.internal_phone.unwrap_or_default(),
                e.common_phone.unwrap_or_default(),
                e.city_phone.unwrap_or_default(),
                e.email.unwrap_or_default(),
            ]
        })
        .collect();

    Ok(DirectoryTable {
        title: EXPORT_TITLE.to_string(),
        columns: EXPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    })
}
