//! CSV dataset loading for bulk registration.
//!
//! The uploaded file must carry a header row with at least the `task_url`,
//! `start_date` and `end_date` columns; extra columns are ignored. The whole
//! file is rejected before any row is processed when one of the required
//! columns is missing.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::Path;

/// Date-time format of the `start_date` and `end_date` columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const REQUIRED_COLUMNS: [&str; 3] = ["task_url", "start_date", "end_date"];

/// One row of the uploaded dataset, exactly as read from the file.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkRow {
    pub task_url: String,
    pub start_date: String,
    pub end_date: String,
}

impl BulkRow {
    /// Trims all three fields and parses the date columns.
    ///
    /// A date that does not match [`DATE_FORMAT`] is an error; the caller
    /// treats it as fatal for the remainder of the batch.
    pub fn parsed(&self) -> Result<(String, NaiveDateTime, NaiveDateTime)> {
        let task_url = self.task_url.trim().to_string();
        let start = NaiveDateTime::parse_from_str(self.start_date.trim(), DATE_FORMAT)
            .with_context(|| Message::InvalidDateFormat(self.start_date.trim().to_string()).to_string())?;
        let end = NaiveDateTime::parse_from_str(self.end_date.trim(), DATE_FORMAT)
            .with_context(|| Message::InvalidDateFormat(self.end_date.trim().to_string()).to_string())?;
        Ok((task_url, start, end))
    }
}

/// Loads the dataset, validating the header before any row is read.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<BulkRow>> {
    let mut reader = csv::Reader::from_path(path.as_ref())
        .map_err(|e| msg_error_anyhow!(Message::CsvLoadFailed(e.to_string())))?;

    let headers = reader.headers()?.clone();
    if REQUIRED_COLUMNS.iter().any(|column| !headers.iter().any(|h| h == *column)) {
        return Err(msg_error_anyhow!(Message::CsvMissingColumns));
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: BulkRow = record.map_err(|e| msg_error_anyhow!(Message::CsvLoadFailed(e.to_string())))?;
        rows.push(row);
    }
    Ok(rows)
}
