//! CSV ingest for user-profile records.
//!
//! This module turns the user-profiles CSV into the record collection the
//! pipeline operates on.
//!
//! Design goals:
//! - **Permissive row handling**: rows that are too short (or cannot be
//!   decoded) are skipped and counted, never fatal
//! - **Row accounting** so the report can show read/used/skipped counts
//! - **Separation of concerns**: no statistics or split logic here

use std::fs::File;
use std::path::Path;

use crate::domain::UserRecord;
use crate::error::AppError;

/// 0-based index of the consumption-level field.
pub const CONSUMPTION_FIELD: usize = 5;

/// Minimum number of fields a row needs to be usable.
pub const MIN_FIELDS: usize = 6;

/// Ingest output: parsed records plus row accounting for the run report.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub records: Vec<UserRecord>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

impl IngestedData {
    pub fn rows_used(&self) -> usize {
        self.records.len()
    }
}

/// Load user records from a comma-delimited file.
///
/// The first line is treated as a header and discarded. Rows with fewer than
/// [`MIN_FIELDS`] fields, and rows the reader cannot decode, are skipped and
/// counted rather than failing the run. A file that opens but yields zero
/// usable rows is rejected by the pipeline, not here.
pub fn load_user_records(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(1, format!("Failed to open input '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for result in reader.records() {
        rows_read += 1;
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("skipping undecodable row {rows_read}: {e}");
                rows_skipped += 1;
                continue;
            }
        };

        if row.len() < MIN_FIELDS {
            log::warn!(
                "skipping row {rows_read}: {} fields, expected at least {MIN_FIELDS}",
                row.len()
            );
            rows_skipped += 1;
            continue;
        }

        // row.len() >= MIN_FIELDS guarantees the field exists.
        let consumption = row.get(CONSUMPTION_FIELD).unwrap_or_default();
        records.push(UserRecord::new(consumption));
    }

    Ok(IngestedData {
        records,
        rows_read,
        rows_skipped,
    })
}
