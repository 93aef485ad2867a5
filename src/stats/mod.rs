//! Consumption-level categorization and distribution statistics.
//!
//! The five raw consumption levels collapse into three coarse buckets before
//! any counting. The collapse policy lives in one data table so it can be
//! audited or extended without touching split logic.

use std::collections::BTreeMap;

use crate::domain::UserRecord;
use crate::error::AppError;

/// Collapse table: raw consumption level -> coarse bucket.
///
/// The two mid levels fold into the single `中` bucket; every other label
/// passes through unchanged.
const COLLAPSE: [(&str, &str); 2] = [("中低", "中"), ("中高", "中")];

/// Map a raw consumption level to its coarse bucket.
///
/// Labels without a collapse entry map to themselves, so an unrecognized
/// label becomes its own bucket rather than an error.
pub fn coarse(raw: &str) -> &str {
    COLLAPSE
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
        .unwrap_or(raw)
}

/// Coarse-category distribution over a record collection.
///
/// Fractions are in `[0, 1]` and sum to 1 within floating-point tolerance.
/// The `BTreeMap` gives the name-sorted iteration order the report relies on
/// (not count-sorted).
pub fn distribution(records: &[UserRecord]) -> Result<BTreeMap<String, f64>, AppError> {
    if records.is_empty() {
        return Err(AppError::new(
            1,
            "Cannot compute a distribution over zero records.",
        ));
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(coarse(&record.consumption)).or_insert(0) += 1;
    }

    let total = records.len() as f64;
    Ok(counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count as f64 / total))
        .collect())
}
