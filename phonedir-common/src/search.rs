//! Search/filter engine over the employee store
//!
//! Free-text matching is a case-insensitive substring scan across all
//! textual fields. The scan runs in Rust over the fetched rows because
//! SQLite's `LIKE` only folds ASCII and directory data is largely
//! Cyrillic. The department filter is exact equality and is pushed down
//! to SQL; combined with the free-text condition with logical AND.
//! No ranking, no pagination; order is stable by insertion.

use crate::db::models::Employee;
use crate::db::employees;
use crate::Result;
use sqlx::SqlitePool;

/// Optional free-text query and department filter. Empty strings are
/// treated as absent.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub search: Option<String>,
    pub department: Option<String>,
}

/// Return all matching records. Both filters absent -> everything.
pub async fn search_employees(pool: &SqlitePool, params: &SearchParams) -> Result<Vec<Employee>> {
    let department = params
        .department
        .as_deref()
        .filter(|d| !d.is_empty());

    let records = employees::list_by_department(pool, department).await?;

    let Some(query) = params.search.as_deref().filter(|q| !q.is_empty()) else {
        return Ok(records);
    };

    let needle = query.to_lowercase();
    Ok(records
        .into_iter()
        .filter(|e| matches_free_text(e, &needle))
        .collect())
}

/// True when the lowercased needle is a substring of any textual
/// field; absent optionals count as empty strings.
fn matches_free_text(employee: &Employee, needle_lower: &str) -> bool {
    let fields = [
        Some(employee.department.as_str()),
        Some(employee.full_name.as_str()),
        Some(employee.position.as_str()),
        employee.internal_phone.as_deref(),
        employee.common_phone.as_deref(),
        employee.city_phone.as_deref(),
        employee.email.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(full_name: &str, department: &str, position: &str) -> Employee {
        Employee {
            guid: "g".to_string(),
            department: department.to_string(),
            full_name: full_name.to_string(),
            position: position.to_string(),
            internal_phone: Some("200".to_string()),
            common_phone: None,
            city_phone: None,
            email: Some("a@x.com".to_string()),
            photo: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn matches_cyrillic_case_insensitively() {
        let e = sample("А. Иванов", "IT", "Инженер");
        assert!(matches_free_text(&e, &"инж".to_lowercase()));
        assert!(matches_free_text(&e, &"ИВАНОВ".to_lowercase()));
        assert!(!matches_free_text(&e, &"бухгалтер".to_lowercase()));
    }

    #[test]
    fn matches_phone_and_email_fields() {
        let e = sample("А. Иванов", "IT", "Инженер");
        assert!(matches_free_text(&e, "200"));
        assert!(matches_free_text(&e, "a@x"));
    }

    #[test]
    fn absent_fields_never_match() {
        let mut e = sample("А. Иванов", "IT", "Инженер");
        e.common_phone = None;
        assert!(!matches_free_text(&e, "+996"));
    }
}
