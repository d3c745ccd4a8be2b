//! Spreadsheet column reconciliation
//!
//! Uploaded files spell some headers inconsistently; the observed
//! variants differ by punctuation and abbreviation. Each aliased field
//! carries an ordered alias list and the first alias that exactly
//! matches a present header wins. Matching is exact string equality,
//! case included - fuzzy matching could silently map an unrelated
//! column onto a phone field, so it is deliberately not done.
//!
//! Required fields are read by their canonical header only. A missing
//! header never fails the import; the field just resolves to absent and
//! every row yields the empty value for it.

/// Canonical header for the department field
pub const DEPARTMENT_HEADER: &str = "Отдел";
/// Canonical header for the full name field
pub const FULL_NAME_HEADER: &str = "ФИО";
/// Canonical header for the position field
pub const POSITION_HEADER: &str = "Должность";

/// Accepted spellings for the internal phone column, in priority order
pub const INTERNAL_PHONE_ALIASES: &[&str] = &["№ вн.", "внутр. №"];
/// Accepted spellings for the common phone column
pub const COMMON_PHONE_ALIASES: &[&str] = &["общ. №"];
/// Accepted spellings for the city phone column
pub const CITY_PHONE_ALIASES: &[&str] = &["городской №"];
/// Accepted spellings for the email column
pub const EMAIL_ALIASES: &[&str] = &["email"];

/// Resolved source-column index per internal field, fixed once for a
/// whole file. `None` means the field is absent from this file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub department: Option<usize>,
    pub full_name: Option<usize>,
    pub position: Option<usize>,
    pub internal_phone: Option<usize>,
    pub common_phone: Option<usize>,
    pub city_phone: Option<usize>,
    pub email: Option<usize>,
}

impl ColumnMap {
    /// Reconcile the file's header row against the alias table
    pub fn resolve(headers: &[String]) -> Self {
        Self {
            department: find_header(headers, DEPARTMENT_HEADER),
            full_name: find_header(headers, FULL_NAME_HEADER),
            position: find_header(headers, POSITION_HEADER),
            internal_phone: find_alias(headers, INTERNAL_PHONE_ALIASES),
            common_phone: find_alias(headers, COMMON_PHONE_ALIASES),
            city_phone: find_alias(headers, CITY_PHONE_ALIASES),
            email: find_alias(headers, EMAIL_ALIASES),
        }
    }

    /// Cell for a resolved field in one row; `None` when the field is
    /// absent from the file or the row is short.
    pub fn cell<'a>(&self, row: &'a [String], index: Option<usize>) -> Option<&'a str> {
        index.and_then(|i| row.get(i)).map(String::as_str)
    }
}

fn find_header(headers: &[String], canonical: &str) -> Option<usize> {
    headers.iter().position(|h| h == canonical)
}

fn find_alias(headers: &[String], aliases: &[&str]) -> Option<usize> {
    // First alias present wins; alias order is the priority order.
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}
