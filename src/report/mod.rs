//! Reporting: skew deltas against the baseline distribution, plus the
//! formatted terminal output (`format`).

pub mod format;

pub use format::*;

use std::collections::BTreeMap;

/// Absolute per-category difference between a subset distribution and the
/// baseline.
///
/// Every category of the baseline gets an entry. A category missing from the
/// subset counts as fraction 0.0, never a lookup failure; categories that
/// exist only in the subset are not reported (the baseline is the reference).
pub fn distribution_deltas(
    baseline: &BTreeMap<String, f64>,
    subset: &BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    baseline
        .iter()
        .map(|(category, base)| {
            let sub = subset.get(category).copied().unwrap_or(0.0);
            (category.clone(), (sub - base).abs())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn deltas_are_absolute_differences() {
        let baseline = dist(&[("低", 0.6), ("高", 0.4)]);
        let test = dist(&[("低", 0.5), ("高", 0.5)]);

        let deltas = distribution_deltas(&baseline, &test);
        assert!((deltas["低"] - 0.1).abs() < 1e-9);
        assert!((deltas["高"] - 0.1).abs() < 1e-9);
    }

    #[test]
    fn missing_subset_category_counts_as_zero() {
        let baseline = dist(&[("中", 0.3), ("低", 0.7)]);
        let subset = dist(&[("低", 1.0)]);

        let deltas = distribution_deltas(&baseline, &subset);
        assert!((deltas["中"] - 0.3).abs() < 1e-9);
        assert!((deltas["低"] - 0.3).abs() < 1e-9);
    }

    #[test]
    fn subset_only_categories_are_not_reported() {
        let baseline = dist(&[("低", 1.0)]);
        let subset = dist(&[("低", 0.5), ("高", 0.5)]);

        let deltas = distribution_deltas(&baseline, &subset);
        assert_eq!(deltas.len(), 1);
        assert!(deltas.contains_key("低"));
    }
}
