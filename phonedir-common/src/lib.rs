//! # Phone Directory Common Library
//!
//! Shared code for the phone-directory backend:
//! - Database schema, models and queries (employee record store)
//! - Spreadsheet import pipeline (reader, column reconciliation,
//!   phone normalization, batch commit)
//! - Search/filter engine
//! - Export table assembly for the PDF renderer
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod import;
pub mod search;

pub use error::{Error, Result};
