//! The split pipeline shared by the binary and tests.
//!
//! One synchronous pass:
//! ingest -> baseline distribution -> stratified split -> subset
//! distributions -> skew deltas.
//!
//! The only stateful piece is the seeded generator; it is created here and
//! passed down to the splitter by mutable reference, never held as ambient
//! state, so determinism stays testable in isolation.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::{SplitConfig, UserRecord};
use crate::error::AppError;
use crate::io::ingest::{IngestedData, load_user_records};
use crate::report::distribution_deltas;
use crate::split::{SplitIndices, stratified_split};
use crate::stats::distribution;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub split: SplitIndices,
    pub baseline: BTreeMap<String, f64>,
    pub train_dist: BTreeMap<String, f64>,
    pub test_dist: BTreeMap<String, f64>,
    pub train_deltas: BTreeMap<String, f64>,
    pub test_deltas: BTreeMap<String, f64>,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_split(config: &SplitConfig) -> Result<RunOutput, AppError> {
    let ingest = load_user_records(&config.csv_path)?;
    if ingest.records.is_empty() {
        return Err(AppError::new(
            1,
            format!(
                "No valid records parsed from '{}'.",
                config.csv_path.display()
            ),
        ));
    }

    let baseline = distribution(&ingest.records)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let split = stratified_split(&ingest.records, config.test_ratio, &mut rng);

    let train = materialize(&ingest.records, &split.train);
    let test = materialize(&ingest.records, &split.test);

    let train_dist = distribution(&train)?;
    let test_dist = distribution(&test)?;

    let train_deltas = distribution_deltas(&baseline, &train_dist);
    let test_deltas = distribution_deltas(&baseline, &test_dist);

    Ok(RunOutput {
        ingest,
        split,
        baseline,
        train_dist,
        test_dist,
        train_deltas,
        test_deltas,
    })
}

fn materialize(records: &[UserRecord], indices: &[usize]) -> Vec<UserRecord> {
    indices.iter().map(|&i| records[i].clone()).collect()
}
