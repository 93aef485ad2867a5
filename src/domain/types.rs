//! Shared domain types and run constants.

use std::path::PathBuf;

/// Fixed input path. The program takes no CLI arguments; the dataset is
/// expected next to the working directory, as written by `gen-profiles`.
pub const DEFAULT_INPUT: &str = "user_profiles_v2.csv";

/// Fraction of each category held out for the test set.
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

/// Seed for the split's pseudo-random generator.
pub const DEFAULT_SEED: u64 = 42;

/// One loaded user record.
///
/// Only the stratification attribute survives ingest. Records are immutable
/// once loaded and owned by the ingest output for the program's lifetime; the
/// coarse category is recomputed on demand rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Raw consumption level, one of five fixed labels.
    pub consumption: String,
}

impl UserRecord {
    pub fn new(consumption: impl Into<String>) -> Self {
        Self {
            consumption: consumption.into(),
        }
    }
}

/// Parameters of one split run.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub csv_path: PathBuf,
    pub test_ratio: f64,
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_INPUT),
            test_ratio: DEFAULT_TEST_RATIO,
            seed: DEFAULT_SEED,
        }
    }
}
