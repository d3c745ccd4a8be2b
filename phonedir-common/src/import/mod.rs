//! Spreadsheet import pipeline
//!
//! Flow: detect format -> parse the whole payload -> reconcile columns
//! once -> stage one candidate record per row (pure, no I/O) -> commit
//! the staged rows in a single transaction. A failure anywhere leaves
//! zero new rows persisted; there is no partial commit.
//!
//! The pipeline does not deduplicate against existing records:
//! importing the same file twice doubles the directory. That is the
//! documented behavior of the system, not an accident (see DESIGN.md).

use crate::db::models::NewEmployee;
use crate::db::employees;
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

pub mod columns;
pub mod phone;
pub mod reader;

pub use columns::ColumnMap;
pub use phone::{normalize_phone, normalize_phone_opt};
pub use reader::{parse_sheet, Sheet, SpreadsheetFormat};

/// Import a spreadsheet payload into the record store.
///
/// Returns the number of records committed. Zero data rows succeed
/// trivially with a count of 0.
pub async fn import_spreadsheet(
    pool: &SqlitePool,
    filename: &str,
    bytes: &[u8],
) -> Result<usize> {
    let format = SpreadsheetFormat::from_filename(filename)
        .ok_or_else(|| Error::UnsupportedFormat(filename.to_string()))?;

    let sheet = parse_sheet(bytes, format)?;
    let staged = stage_rows(&sheet);

    if staged.is_empty() {
        info!(filename, "Import: no data rows");
        return Ok(0);
    }

    // One transactional batch; a storage failure aborts the whole
    // import and surfaces the underlying reason.
    let guids = employees::insert_employees(pool, &staged)
        .await
        .map_err(|e| Error::ImportFailed(e.to_string()))?;

    info!(filename, imported = guids.len(), "Import committed");
    Ok(guids.len())
}

/// Build the full list of candidate records from the parsed sheet.
///
/// Pure: column reconciliation happens once against the header row,
/// then every row is extracted through the resolved indexes with the
/// phone fields normalized. Missing headers yield empty values rather
/// than failing the row (leniency at row level, atomicity at batch
/// level).
pub fn stage_rows(sheet: &Sheet) -> Vec<NewEmployee> {
    let map = ColumnMap::resolve(&sheet.headers);

    sheet
        .rows
        .iter()
        .map(|row| NewEmployee {
            department: map.cell(row, map.department).unwrap_or("").to_string(),
            full_name: map.cell(row, map.full_name).unwrap_or("").to_string(),
            position: map.cell(row, map.position).unwrap_or("").to_string(),
            internal_phone: normalize_phone_opt(map.cell(row, map.internal_phone)),
            common_phone: normalize_phone_opt(map.cell(row, map.common_phone)),
            city_phone: normalize_phone_opt(map.cell(row, map.city_phone)),
            email: map
                .cell(row, map.email)
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(String::from),
        })
        .collect()
}
