//! Standalone generator for the `user_profiles_v2.csv` dataset.

use std::path::Path;
use std::process::ExitCode;

use chrono::Local;

use strata_split::data::{generate_profiles, write_profiles_csv};
use strata_split::error::AppError;

/// Fixed generation parameters; the generator takes no CLI arguments.
const PROFILE_COUNT: usize = 500;
const SEED: u64 = 42;
const OUTPUT: &str = "user_profiles_v2.csv";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), AppError> {
    env_logger::init();

    let created_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let rows = generate_profiles(PROFILE_COUNT, SEED, &created_at)?;
    write_profiles_csv(Path::new(OUTPUT), &rows)?;

    println!("Wrote {} user profiles to {OUTPUT}", rows.len());
    Ok(())
}
