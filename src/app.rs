//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - assembles the fixed run configuration (the program has no CLI surface)
//! - runs the split pipeline
//! - prints the distribution/delta report

pub mod pipeline;

use crate::domain::SplitConfig;
use crate::error::AppError;
use crate::report::format_run_report;

/// Entry point for the `strata` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::init();

    let config = SplitConfig::default();
    let run = pipeline::run_split(&config)?;

    println!("{}", format_run_report(&run, &config));
    Ok(())
}
