//! Database models

use serde::{Deserialize, Serialize};

/// One employee's directory entry.
///
/// Timestamps are stored and exposed as RFC 3339 strings, matching the
/// TEXT columns in SQLite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub guid: String,
    pub department: String,
    pub full_name: String,
    pub position: String,
    pub internal_phone: Option<String>,
    pub common_phone: Option<String>,
    pub city_phone: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Candidate record for insertion. The store assigns guid and timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    pub department: String,
    pub full_name: String,
    pub position: String,
    pub internal_phone: Option<String>,
    pub common_phone: Option<String>,
    pub city_phone: Option<String>,
    pub email: Option<String>,
}

/// Partial update: unspecified fields retain their prior values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub department: Option<String>,
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub internal_phone: Option<String>,
    pub common_phone: Option<String>,
    pub city_phone: Option<String>,
    pub email: Option<String>,
}
