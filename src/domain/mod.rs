//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the loaded user record (`UserRecord`)
//! - the run configuration and its fixed defaults (`SplitConfig`)

pub mod types;

pub use types::*;
