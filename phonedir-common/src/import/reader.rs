//! Spreadsheet parsing: CSV and XLSX payloads into header + rows

use crate::{Error, Result};
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

/// Supported tabular formats, identified by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Csv,
    Xlsx,
}

impl SpreadsheetFormat {
    /// Detect the format from a filename suffix (case-insensitive)
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".csv") {
            Some(Self::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(Self::Xlsx)
        } else {
            None
        }
    }
}

/// A parsed spreadsheet: the first file row as headers, every
/// following row as cells positionally aligned with the headers.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse the full payload. Unreadable or structurally corrupt input
/// surfaces a `Parse` error; an empty payload is a valid empty sheet.
pub fn parse_sheet(bytes: &[u8], format: SpreadsheetFormat) -> Result<Sheet> {
    match format {
        SpreadsheetFormat::Csv => parse_csv(bytes),
        SpreadsheetFormat::Xlsx => parse_xlsx(bytes),
    }
}

fn parse_csv(bytes: &[u8]) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::Parse(format!("CSV header row: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::Parse(format!("CSV row: {}", e)))?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Sheet { headers, rows })
}

fn parse_xlsx(bytes: &[u8]) -> Result<Sheet> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook: Xlsx<_> =
        Xlsx::new(cursor).map_err(|e| Error::Parse(format!("XLSX workbook: {}", e)))?;

    // The directory upload is a single-sheet file; read the first sheet.
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::Parse("XLSX workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::Parse(format!("XLSX sheet '{}': {}", sheet_name, e)))?;

    let mut row_iter = range.rows();
    let headers: Vec<String> = match row_iter.next() {
        Some(header_row) => header_row
            .iter()
            .map(|c| cell_to_string(c).trim().to_string())
            .collect(),
        None => return Ok(Sheet { headers: Vec::new(), rows: Vec::new() }),
    };

    let rows = row_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(Sheet { headers, rows })
}

/// Raw textual representation of an XLSX cell. Floats keep their
/// native rendering; the phone normalizer reverses the `.0` artifact
/// where producers emit it.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(dt) => dt.clone(),
        Data::DurationIso(d) => d.clone(),
        other => other.to_string(),
    }
}
