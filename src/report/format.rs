//! Formatted terminal output for a split run.
//!
//! We keep formatting code in one place so:
//! - the statistics/split code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use std::collections::BTreeMap;

use crate::app::pipeline::RunOutput;
use crate::domain::SplitConfig;

/// Render one distribution (or delta) table.
///
/// Lines follow the fixed `  <category>  <value>` layout with three decimal
/// places; `BTreeMap` iteration keeps categories name-sorted.
pub fn format_table(title: &str, values: &BTreeMap<String, f64>) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push_str(":\n");
    for (category, value) in values {
        out.push_str(&format!("  {category}  {value:.3}\n"));
    }
    out
}

/// Format the full run report: header, the three distribution tables, then
/// the two skew-delta tables.
pub fn format_run_report(run: &RunOutput, config: &SplitConfig) -> String {
    let mut out = String::new();

    out.push_str("=== strata - stratified hold-out check ===\n");
    out.push_str(&format!("Input: {}\n", config.csv_path.display()));
    out.push_str(&format!(
        "Rows: {} read, {} used ({} skipped)\n",
        run.ingest.rows_read,
        run.ingest.rows_used(),
        run.ingest.rows_skipped
    ));
    out.push_str(&format!(
        "Split: test_ratio={:.2} seed={} -> {} train / {} test\n\n",
        config.test_ratio,
        config.seed,
        run.split.train.len(),
        run.split.test.len()
    ));

    out.push_str(&format_table(
        &format!("Baseline distribution (full, {} rows)", run.ingest.rows_used()),
        &run.baseline,
    ));
    out.push('\n');
    out.push_str(&format_table(
        &format!("Train distribution ({} rows)", run.split.train.len()),
        &run.train_dist,
    ));
    out.push('\n');
    out.push_str(&format_table(
        &format!("Test distribution ({} rows)", run.split.test.len()),
        &run.test_dist,
    ));
    out.push('\n');
    out.push_str(&format_table("Train vs baseline |delta|", &run.train_deltas));
    out.push('\n');
    out.push_str(&format_table("Test vs baseline |delta|", &run.test_deltas));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lines_use_the_fixed_layout() {
        let values: BTreeMap<String, f64> =
            [("低".to_string(), 0.6), ("高".to_string(), 0.4)].into();

        let table = format_table("Baseline distribution (full, 10 rows)", &values);
        assert_eq!(
            table,
            "Baseline distribution (full, 10 rows):\n  低  0.600\n  高  0.400\n"
        );
    }

    #[test]
    fn table_rounds_to_three_decimals() {
        let values: BTreeMap<String, f64> = [("中".to_string(), 1.0 / 3.0)].into();

        let table = format_table("t", &values);
        assert!(table.contains("  中  0.333\n"));
    }
}
